//! # parametra
//!
//! parametra is the formula engine of a parametric modeler, written in Rust.
//! It tokenizes, parses and evaluates small expressions over numbers,
//! physical quantities, strings and booleans, with unit-safe arithmetic and a
//! pluggable catalogue of operators and functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::FormulaError,
    interpreter::{
        evaluator::{core::Evaluator, library::STANDARD_HANDLERS},
        grammar::FORMULA_GRAMMAR,
        value::core::Primitive,
    },
};

/// Defines the expression tree.
///
/// This module declares the `Expression` enum produced by the parser and
/// consumed by the evaluator, along with `ExpressionKind`, the names of the
/// grammar rules that build each node.
///
/// # Responsibilities
/// - Defines one node type per expression kind.
/// - Renders trees in fully parenthesised form for diagnostics.
pub mod ast;
/// Provides the error types of every stage.
///
/// This module defines the errors raised while tokenizing, parsing or
/// evaluating a formula, and the `FormulaError` that wraps them.
///
/// # Responsibilities
/// - Defines one error enum per stage with end-user facing messages.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the formula engine.
///
/// This module ties together the lexer, the grammar, the parser, the evaluator,
/// the value type and the unit tables.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize`, and `f64` without silent data
///   loss.
pub mod util;

/// Solves a formula with the standard grammar, handlers and units.
///
/// Returns `Ok(None)` when the text is empty or holds only whitespace.
///
/// # Errors
/// Returns the lexical, syntax or evaluation error that stopped the formula.
///
/// # Examples
/// ```
/// use parametra::{interpreter::value::Primitive, solve};
///
/// assert_eq!(solve("2 + 3 * 4").unwrap(), Some(Primitive::Number(14.0)));
/// assert_eq!(solve("1cm + 5mm").unwrap(),
///            Some(Primitive::Quantity(15.0, "distance".to_string())));
/// assert_eq!(solve("   ").unwrap(), None);
///
/// let err = solve("1mm + 1").unwrap_err();
/// assert_eq!(err.to_string(), "Cannot add distance and number.");
/// ```
pub fn solve(text: &str) -> Result<Option<Primitive>, FormulaError> {
    Evaluator::new(&FORMULA_GRAMMAR, &STANDARD_HANDLERS).solve(text)
}
