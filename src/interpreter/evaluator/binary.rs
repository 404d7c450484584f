/// The operator catalogue.
///
/// Lists every binary and ternary operator with its accepted argument kinds.
pub mod core;

/// Addition, subtraction, multiplication and division.
///
/// Encodes the unit-safety rules: sums need matching kinds, products allow at
/// most one quantity, and quotients cancel matching kinds.
pub mod arithmetic;

/// Exponent, modulo and shift operators, whose right operand is always a
/// plain number.
pub mod power;

/// Ordering and equality comparisons.
pub mod comparison;

/// Boolean conjunction, disjunction and the conditional operator.
pub mod logic;

/// Bitwise conjunction and disjunction on integral values.
pub mod bitwise;
