/// The runtime value type.
///
/// Defines `Primitive`, the result of evaluating any expression, together with
/// its kind names, conversions and display format.
pub mod core;

pub use self::core::Primitive;
