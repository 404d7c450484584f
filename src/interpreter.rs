/// The lexer module turns formula text into tokens.
///
/// The lexer reads the raw formula and produces a whitespace-free sequence of
/// tokens: numbers, quantities with a unit suffix, strings, identifiers,
/// operators and delimiters. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Recognizes literals, identifiers and the longest matching operator.
/// - Decodes escape sequences inside string literals.
/// - Reports unterminated string literals.
pub mod lexer;
/// The grammar module describes the formula language as data.
///
/// Rules are authored with a few combinators and compiled once into flat
/// alternatives plus an operator precedence table.
pub mod grammar;
/// The parser module builds expression trees from tokens.
///
/// The parser matches every compiled alternative against the token stream in
/// lockstep, keeps the longest match, and chains binary operators left to right
/// while rotating them into precedence-correct trees.
///
/// # Responsibilities
/// - Converts tokens into a single `Expression` spanning the whole input.
/// - Reports the furthest syntax error when no alternative matches.
pub mod parser;
/// The evaluator module computes the value of an expression tree.
///
/// Every operator, function and constant is resolved through a handler table,
/// so the evaluator itself knows nothing about arithmetic.
///
/// # Responsibilities
/// - Resolves literals, quantities and identifiers.
/// - Checks arity and argument kinds before invoking a handler.
/// - Ships the standard library of constants, operators and functions.
pub mod evaluator;
/// The value module defines the typed result of evaluation.
///
/// A `Primitive` is a plain number, a quantity with a kind such as `distance`,
/// a string or a boolean.
pub mod value;
/// Unit tables resolve quantity literals to base-unit magnitudes.
///
/// The evaluator only depends on the `UnitTable` trait; `StandardUnits` covers
/// distances and angles.
pub mod units;
