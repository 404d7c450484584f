/// The builtin function catalogue.
///
/// Declares every function with its name, argument kinds and implementation.
pub mod core;

/// Rounding, roots, logarithms, hyperbolic functions, `min`/`max` and `sign`.
pub mod math;

/// Trigonometric functions and their inverses.
///
/// Angles are in radians: plain numbers are taken as radians, and inverse
/// functions return angle quantities.
pub mod trig;

/// String functions, including regular expression search and replacement.
pub mod string;
