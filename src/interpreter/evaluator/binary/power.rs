use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{core::EvalResult, utils::arguments},
        value::core::Primitive,
    },
    util::num::{f64_to_i64_checked, i64_to_f64_checked},
};

/// Raises a number or quantity to a plain-number power, keeping the kind of
/// the base.
///
/// # Example
/// ```
/// use parametra::interpreter::{evaluator::binary::power::pow, value::Primitive};
///
/// let r = pow(&[Primitive::Number(2.0), Primitive::Number(10.0)]).unwrap();
/// assert_eq!(r, Primitive::Number(1024.0));
/// ```
pub fn pow(args: &[Primitive]) -> EvalResult<Primitive> {
    let [base, exponent] = arguments::<2>(args)?;
    Ok(base.with_magnitude(base.as_magnitude()?.powf(exponent.as_magnitude()?)))
}

/// Floating-point remainder with the sign of the dividend. A zero divisor
/// yields `NaN` rather than an error.
pub fn rem(args: &[Primitive]) -> EvalResult<Primitive> {
    let [left, right] = arguments::<2>(args)?;
    Ok(left.with_magnitude(left.as_magnitude()? % right.as_magnitude()?))
}

/// Shifts an integral value left by a plain-number bit count.
pub fn shl(args: &[Primitive]) -> EvalResult<Primitive> {
    shift(args, i64::checked_shl)
}

/// Arithmetic right shift of an integral value by a plain-number bit count.
pub fn shr(args: &[Primitive]) -> EvalResult<Primitive> {
    shift(args, i64::checked_shr)
}

fn shift(args: &[Primitive], apply: fn(i64, u32) -> Option<i64>) -> EvalResult<Primitive> {
    let [left, right] = arguments::<2>(args)?;

    let value = f64_to_i64_checked(left.as_magnitude()?)?;
    let bits = f64_to_i64_checked(right.as_magnitude()?)?;
    let out_of_range = || EvalError::InvalidArgument { details: format!("shift amount {bits} must be between 0 and 63") };

    let bits = u32::try_from(bits).map_err(|_| out_of_range())?;
    let shifted = apply(value, bits).ok_or_else(out_of_range)?;
    let shifted = i64_to_f64_checked(shifted,
                                     EvalError::InvalidArgument { details: format!("{value} shifted by {bits} is too large") })?;

    Ok(left.with_magnitude(shifted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_kind_is_preserved() {
        let side = Primitive::Quantity(3.0, "distance".to_string());
        assert_eq!(pow(&[side.clone(), Primitive::Number(2.0)]),
                   Ok(Primitive::Quantity(9.0, "distance".to_string())));
        assert_eq!(rem(&[side, Primitive::Number(2.0)]),
                   Ok(Primitive::Quantity(1.0, "distance".to_string())));
    }

    #[test]
    fn remainder_by_zero_is_nan() {
        let r = rem(&[Primitive::Number(5.0), Primitive::Number(0.0)]).unwrap();
        assert!(r.as_magnitude().unwrap().is_nan());
    }

    #[test]
    fn shifts() {
        assert_eq!(shl(&[Primitive::Number(1.0), Primitive::Number(4.0)]),
                   Ok(Primitive::Number(16.0)));
        assert_eq!(shr(&[Primitive::Number(-16.0), Primitive::Number(2.0)]),
                   Ok(Primitive::Number(-4.0)));
        assert!(matches!(shl(&[Primitive::Number(1.5), Primitive::Number(1.0)]),
                         Err(EvalError::RealIsFractional { .. })));
        assert!(matches!(shl(&[Primitive::Number(1.0), Primitive::Number(64.0)]),
                         Err(EvalError::InvalidArgument { .. })));
        assert!(matches!(shl(&[Primitive::Number(1.0), Primitive::Number(-1.0)]),
                         Err(EvalError::InvalidArgument { .. })));
    }
}
