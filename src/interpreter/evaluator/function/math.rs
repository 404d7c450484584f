use std::cmp::Ordering;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{binary, binary::comparison::compare, core::EvalResult, utils::arguments},
        value::core::Primitive,
    },
};

/// Generates a one-argument builtin that maps the magnitude of a number or
/// quantity and keeps its kind.
///
/// # Example
/// ```
/// use parametra::interpreter::{evaluator::function::math::floor, value::Primitive};
///
/// let r = floor(&[Primitive::Quantity(2.7, "distance".into())]).unwrap();
/// assert_eq!(r, Primitive::Quantity(2.0, "distance".into()));
/// ```
macro_rules! kind_preserving_builtin {
    ($fname:ident, $real_fn:ident) => {
        #[doc = concat!("`", stringify!($fname), "` of a number or quantity, keeping its kind.")]
        pub fn $fname(args: &[Primitive]) -> EvalResult<Primitive> {
            let [value] = arguments::<1>(args)?;
            Ok(value.with_magnitude(value.as_magnitude()?.$real_fn()))
        }
    };
}

kind_preserving_builtin!(round, round);
kind_preserving_builtin!(floor, floor);
kind_preserving_builtin!(ceil, ceil);
kind_preserving_builtin!(trunc, trunc);
kind_preserving_builtin!(abs, abs);

/// Generates a one-argument builtin on plain numbers.
macro_rules! number_builtin {
    ($fname:ident, $real_fn:ident) => {
        #[doc = concat!("`", stringify!($fname), "` of a plain number.")]
        pub fn $fname(args: &[Primitive]) -> EvalResult<Primitive> {
            let [value] = arguments::<1>(args)?;
            Ok(Primitive::Number(value.as_magnitude()?.$real_fn()))
        }
    };
}

number_builtin!(sqrt, sqrt);
number_builtin!(cbrt, cbrt);
number_builtin!(exp, exp);
number_builtin!(ln, ln);
number_builtin!(log2, log2);
number_builtin!(log10, log10);
number_builtin!(sinh, sinh);
number_builtin!(cosh, cosh);
number_builtin!(tanh, tanh);
number_builtin!(asinh, asinh);
number_builtin!(acosh, acosh);
number_builtin!(atanh, atanh);

/// The sign of a number or quantity as a plain number: `-1`, `0` or `1`.
///
/// Unlike `f64::signum`, zero maps to `0`. `NaN` stays `NaN`.
pub fn sign(args: &[Primitive]) -> EvalResult<Primitive> {
    let [value] = arguments::<1>(args)?;
    let magnitude = value.as_magnitude()?;
    let sign = if magnitude == 0.0 { 0.0 } else { magnitude.signum() };
    Ok(Primitive::Number(sign))
}

/// `pow(base, exponent)`, the function form of `^`.
pub fn pow(args: &[Primitive]) -> EvalResult<Primitive> {
    binary::power::pow(args)
}

/// Logarithm of `value` to an arbitrary `base`.
///
/// # Errors
/// `DivisionByZero` when `ln(base)` is zero, i.e. for a base of one.
///
/// # Example
/// ```
/// use parametra::interpreter::{evaluator::function::math::log, value::Primitive};
///
/// let r = log(&[Primitive::Number(8.0), Primitive::Number(2.0)]).unwrap();
/// assert_eq!(r, Primitive::Number(3.0));
/// ```
pub fn log(args: &[Primitive]) -> EvalResult<Primitive> {
    let [value, base] = arguments::<2>(args)?;

    let ln_base = base.as_magnitude()?.ln();
    if ln_base == 0.0 {
        return Err(EvalError::DivisionByZero);
    }

    Ok(Primitive::Number(value.as_magnitude()?.ln() / ln_base))
}

/// The smaller of two values of the same kind.
pub fn min(args: &[Primitive]) -> EvalResult<Primitive> {
    pick(args, Ordering::Less)
}

/// The larger of two values of the same kind.
pub fn max(args: &[Primitive]) -> EvalResult<Primitive> {
    pick(args, Ordering::Greater)
}

/// Returns the right operand when it orders `wanted` relative to the left
/// one, else the left operand. Unordered values keep the left operand.
fn pick(args: &[Primitive], wanted: Ordering) -> EvalResult<Primitive> {
    let [left, right] = arguments::<2>(args)?;
    let winner = if compare(right, left)? == Some(wanted) { right } else { left };
    Ok(winner.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mm(v: f64) -> Primitive {
        Primitive::Quantity(v, "distance".to_string())
    }

    #[test]
    fn rounding_keeps_the_kind() {
        assert_eq!(round(&[mm(2.5)]), Ok(mm(3.0)));
        assert_eq!(ceil(&[Primitive::Number(-1.5)]), Ok(Primitive::Number(-1.0)));
        assert_eq!(trunc(&[mm(-1.7)]), Ok(mm(-1.0)));
        assert_eq!(abs(&[mm(-4.0)]), Ok(mm(4.0)));
    }

    #[test]
    fn sign_of_zero_is_zero() {
        assert_eq!(sign(&[Primitive::Number(0.0)]), Ok(Primitive::Number(0.0)));
        assert_eq!(sign(&[mm(-3.0)]), Ok(Primitive::Number(-1.0)));
    }

    #[test]
    fn log_of_base_one_fails() {
        assert_eq!(log(&[Primitive::Number(5.0), Primitive::Number(1.0)]),
                   Err(EvalError::DivisionByZero));
    }

    #[test]
    fn min_max_need_matching_kinds() {
        assert_eq!(min(&[mm(3.0), mm(2.0)]), Ok(mm(2.0)));
        assert_eq!(max(&[Primitive::from("a"), Primitive::from("b")]), Ok(Primitive::from("b")));
        assert!(matches!(max(&[mm(1.0), Primitive::Number(2.0)]),
                         Err(EvalError::IncompatibleKinds { operation: "compare", .. })));
    }

    #[test]
    fn roots() {
        assert_eq!(sqrt(&[Primitive::Number(16.0)]), Ok(Primitive::Number(4.0)));
        assert_eq!(cbrt(&[Primitive::Number(27.0)]), Ok(Primitive::Number(3.0)));
    }
}
