use crate::interpreter::{
    evaluator::{
        core::EvalResult,
        handler::{BOOLEAN, Callable, SCALAR},
        utils::arguments,
    },
    value::core::Primitive,
};

/// The prefix operators of the standard library.
pub static UNARY_OPERATORS: &[Callable] = &[Callable::new("+", &[SCALAR], plus),
                                            Callable::new("-", &[SCALAR], negate),
                                            Callable::new("!", &[BOOLEAN], not)];

/// Unary plus: returns the operand unchanged, quantities included.
pub fn plus(args: &[Primitive]) -> EvalResult<Primitive> {
    let [value] = arguments::<1>(args)?;
    Ok(value.clone())
}

/// Arithmetic negation, keeping the quantity kind.
///
/// # Example
/// ```
/// use parametra::interpreter::{evaluator::unary::negate, value::Primitive};
///
/// let v = negate(&[Primitive::Quantity(5.0, "distance".into())]).unwrap();
/// assert_eq!(v, Primitive::Quantity(-5.0, "distance".into()));
/// ```
pub fn negate(args: &[Primitive]) -> EvalResult<Primitive> {
    let [value] = arguments::<1>(args)?;
    Ok(value.with_magnitude(-value.as_magnitude()?))
}

/// Boolean negation.
pub fn not(args: &[Primitive]) -> EvalResult<Primitive> {
    let [value] = arguments::<1>(args)?;
    Ok(Primitive::Boolean(!value.as_bool()?))
}
