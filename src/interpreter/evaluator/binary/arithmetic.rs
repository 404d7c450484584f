use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{arguments, incompatible, kind_carrier, same_scalar_kind},
        },
        value::core::Primitive,
    },
};

/// Adds two numbers or two quantities of the same kind.
///
/// # Errors
/// `IncompatibleKinds` when the operand kinds differ, e.g. a distance and a
/// plain number.
///
/// # Example
/// ```
/// use parametra::interpreter::{evaluator::binary::arithmetic::add, value::Primitive};
///
/// let a = Primitive::Quantity(10.0, "distance".into());
/// let b = Primitive::Quantity(5.0, "distance".into());
/// assert_eq!(add(&[a, b]).unwrap(), Primitive::Quantity(15.0, "distance".into()));
///
/// let err = add(&[Primitive::Number(1.0), Primitive::Quantity(1.0, "angle".into())]).unwrap_err();
/// assert_eq!(err.to_string(), "Cannot add number and angle.");
/// ```
pub fn add(args: &[Primitive]) -> EvalResult<Primitive> {
    additive(args, "add", |a, b| a + b)
}

/// Subtracts two numbers or two quantities of the same kind.
pub fn sub(args: &[Primitive]) -> EvalResult<Primitive> {
    additive(args, "subtract", |a, b| a - b)
}

fn additive(args: &[Primitive],
            operation: &'static str,
            apply: fn(f64, f64) -> f64)
            -> EvalResult<Primitive> {
    let [left, right] = arguments::<2>(args)?;
    if !same_scalar_kind(left, right) {
        return Err(incompatible(operation, left, right));
    }
    Ok(left.with_magnitude(apply(left.as_magnitude()?, right.as_magnitude()?)))
}

/// Multiplies two values of which at most one is a quantity. The result
/// keeps the quantity's kind; there are no derived units.
///
/// # Errors
/// `IncompatibleKinds` when both operands are quantities.
pub fn mul(args: &[Primitive]) -> EvalResult<Primitive> {
    let [left, right] = arguments::<2>(args)?;
    if left.quantity_kind().is_some() && right.quantity_kind().is_some() {
        return Err(incompatible("multiply", left, right));
    }
    let product = left.as_magnitude()? * right.as_magnitude()?;
    Ok(kind_carrier(left, right).with_magnitude(product))
}

/// Divides a number or quantity by a number, or a quantity by a quantity of
/// the same kind, which cancels to a plain number.
///
/// # Errors
/// - `DivisionByZero` for a zero divisor of any kind.
/// - `IncompatibleKinds` for a divisor of another kind, including a plain
///   number divided by a quantity.
pub fn div(args: &[Primitive]) -> EvalResult<Primitive> {
    let [left, right] = arguments::<2>(args)?;

    let divisor = right.as_magnitude()?;
    if divisor == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    let quotient = left.as_magnitude()? / divisor;

    match (left, right) {
        (_, Primitive::Number(_)) => Ok(left.with_magnitude(quotient)),
        (Primitive::Quantity(_, a), Primitive::Quantity(_, b)) if a == b => {
            Ok(Primitive::Number(quotient))
        },
        _ => Err(incompatible("divide", left, right)),
    }
}
