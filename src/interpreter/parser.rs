/// Core parsing logic.
///
/// Contains the entry point, the lockstep matching of compiled alternatives
/// and the greedy chaining of continuations.
pub mod core;

/// Candidate bookkeeping.
///
/// An in-flight alternative with its cursor, position and captured fields, and
/// the match it turns into once complete.
pub(crate) mod candidate;

/// Binary operator chaining.
///
/// Grafts each new binary operation into the running tree according to the
/// precedence table.
pub mod binary;

pub use self::core::{ParseResult, parse};
