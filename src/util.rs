/// Numeric conversion helpers.
///
/// Lossless conversions between `f64` and the integer types used by the
/// integer-flavoured operators and string functions. Every helper returns a
/// `Result` instead of silently truncating or rounding.
pub mod num;
