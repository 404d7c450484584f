/// Tokenizer errors.
///
/// The only lexical failure is a string literal that never closes. The error
/// carries whatever text was captured before the input ran out.
pub mod lex_error;
/// Parser errors.
///
/// Raised when the token sequence cannot be consumed by a single expression:
/// an unexpected token, a premature end of input, or leftover tokens after an
/// otherwise complete expression.
pub mod syntax_error;
/// Evaluation errors.
///
/// Covers engine failures (unknown identifiers, arity and kind mismatches,
/// unparseable literals, unknown units) as well as the domain errors raised by
/// handler bodies such as division by zero or incompatible quantity kinds.
pub mod eval_error;
/// The umbrella error returned by `solve`.
pub mod formula_error;

pub use eval_error::EvalError;
pub use formula_error::FormulaError;
pub use lex_error::LexError;
pub use syntax_error::SyntaxError;
