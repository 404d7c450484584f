/// Authored grammar description.
///
/// Rules are plain data built from a handful of combinators: token matchers,
/// expression slots, choices, loops and optional elements.
pub mod rule;

/// The grammar compiler.
///
/// Flattens every rule into linear match patterns and derives the operator
/// precedence table from the declaration order of binary operator rules.
pub mod compile;

/// The fixed formula grammar and its compiled, process-wide instance.
pub mod definition;

pub use compile::{Alternative, CompiledGrammar, LOOP_UNROLL_LIMIT, Matcher, Precedence, compile};
pub use definition::{FORMULA_GRAMMAR, formula_rules};
pub use rule::{Element, Field, GrammarRule};
