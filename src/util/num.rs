use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use parametra::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!").unwrap(), 42.0);
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// # Errors
/// Returns `EvalError::InvalidArgument` if the value exceeds
/// `MAX_SAFE_U64_INT`.
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked(value: usize) -> EvalResult<f64> {
    match u64::try_from(value) {
        Ok(value) if value <= MAX_SAFE_U64_INT => Ok(value as f64),
        _ => Err(EvalError::InvalidArgument { details: format!("{value} is too large to be represented exactly") }),
    }
}

/// Safely converts an `f64` to `i64` if the value is finite, within range, and
/// not fractional.
///
/// # Errors
/// - `EvalError::InvalidArgument` for non-finite or out-of-range values.
/// - `EvalError::RealIsFractional` for values with a fractional part.
///
/// # Example
/// ```
/// use parametra::{error::EvalError, util::num::f64_to_i64_checked};
///
/// assert_eq!(f64_to_i64_checked(1000.0).unwrap(), 1000);
///
/// let err = f64_to_i64_checked(1.5).unwrap_err();
/// assert!(matches!(err, EvalError::RealIsFractional { .. }));
///
/// assert!(f64_to_i64_checked(1e20).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(EvalError::InvalidArgument { details: format!("cannot convert non-finite value {value} to an integer") });
    }
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(EvalError::InvalidArgument { details: format!("{value} is out of the integer range") });
    }
    if value.fract() != 0.0 {
        return Err(EvalError::RealIsFractional { value });
    }
    Ok(value as i64)
}

/// Converts an `f64` to a `usize` count or index.
///
/// Negative values are clamped to zero, which is what string positions and
/// lengths expect.
///
/// # Errors
/// The same failures as [`f64_to_i64_checked`].
pub fn f64_to_usize_clamped(value: f64) -> EvalResult<usize> {
    let value = f64_to_i64_checked(value)?;
    Ok(usize::try_from(value.max(0)).unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_values_are_rejected() {
        assert_eq!(f64_to_i64_checked(2.5), Err(EvalError::RealIsFractional { value: 2.5 }));
        assert_eq!(f64_to_i64_checked(-3.0), Ok(-3));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(matches!(f64_to_i64_checked(f64::NAN), Err(EvalError::InvalidArgument { .. })));
        assert!(matches!(f64_to_i64_checked(f64::INFINITY),
                         Err(EvalError::InvalidArgument { .. })));
    }

    #[test]
    fn counts_clamp_at_zero() {
        assert_eq!(f64_to_usize_clamped(-4.0), Ok(0));
        assert_eq!(f64_to_usize_clamped(7.0), Ok(7));
    }

    #[test]
    fn lengths_convert_exactly() {
        assert_eq!(usize_to_f64_checked(12), Ok(12.0));
    }
}
