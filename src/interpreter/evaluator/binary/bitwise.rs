use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{arguments, incompatible, kind_carrier},
        },
        value::core::Primitive,
    },
    util::num::{f64_to_i64_checked, i64_to_f64_checked},
};

/// Bitwise AND of two integral values.
///
/// # Example
/// ```
/// use parametra::interpreter::{evaluator::binary::bitwise::bit_and, value::Primitive};
///
/// let r = bit_and(&[Primitive::Number(12.0), Primitive::Number(10.0)]).unwrap();
/// assert_eq!(r, Primitive::Number(8.0));
/// ```
pub fn bit_and(args: &[Primitive]) -> EvalResult<Primitive> {
    bitwise(args, "bitwise-and", |a, b| a & b)
}

/// Bitwise OR of two integral values.
pub fn bit_or(args: &[Primitive]) -> EvalResult<Primitive> {
    bitwise(args, "bitwise-or", |a, b| a | b)
}

/// Applies an integer operation. Like multiplication, at most one operand may
/// be a quantity and the result keeps its kind.
fn bitwise(args: &[Primitive],
           operation: &'static str,
           apply: fn(i64, i64) -> i64)
           -> EvalResult<Primitive> {
    let [left, right] = arguments::<2>(args)?;
    if left.quantity_kind().is_some() && right.quantity_kind().is_some() {
        return Err(incompatible(operation, left, right));
    }

    let a = f64_to_i64_checked(left.as_magnitude()?)?;
    let b = f64_to_i64_checked(right.as_magnitude()?)?;
    let value = apply(a, b);
    let value =
        i64_to_f64_checked(value,
                           EvalError::InvalidArgument { details: format!("{value} is too large to be represented exactly") })?;

    Ok(kind_carrier(left, right).with_magnitude(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_operands_only() {
        assert_eq!(bit_or(&[Primitive::Number(12.0), Primitive::Number(3.0)]),
                   Ok(Primitive::Number(15.0)));
        assert_eq!(bit_and(&[Primitive::Number(2.5), Primitive::Number(3.0)]),
                   Err(EvalError::RealIsFractional { value: 2.5 }));
    }

    #[test]
    fn one_quantity_at_most() {
        let mm = Primitive::Quantity(6.0, "distance".to_string());
        assert_eq!(bit_and(&[mm.clone(), Primitive::Number(3.0)]),
                   Ok(Primitive::Quantity(2.0, "distance".to_string())));
        assert!(matches!(bit_or(&[mm.clone(), mm]), Err(EvalError::IncompatibleKinds { .. })));
    }
}
