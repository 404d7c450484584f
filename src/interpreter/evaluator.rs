/// Core evaluation logic.
///
/// Contains the `Evaluator`, which tokenizes, parses and evaluates formula
/// text against a handler table and a unit table.
pub mod core;

/// Handler declarations and the handler table.
///
/// Describes constants, operators and functions together with the argument
/// kinds they accept, and resolves them by role and name.
pub mod handler;

/// Utility functions for evaluation.
///
/// Provides arity and kind checks and small helpers shared by handler bodies.
pub mod utils;

/// Unary operator implementations: `+`, `-` and `!`.
pub mod unary;

/// Binary operator implementations.
///
/// Covers arithmetic with unit-safety rules, comparisons, boolean logic,
/// shifts, bitwise operations and the conditional operator.
pub mod binary;

/// Builtin function implementations.
pub mod function;

/// The standard library: constants plus every builtin operator and function,
/// assembled into a ready-to-use handler table.
pub mod library;

pub use self::{
    core::{EvalResult, Evaluator},
    handler::{Callable, Handler, HandlerTable, KindPattern, Role},
    library::STANDARD_HANDLERS,
};
