use crate::interpreter::{
    evaluator::{core::EvalResult, utils::arguments},
    value::core::Primitive,
};

/// Boolean AND. Both operands are always evaluated.
pub fn and(args: &[Primitive]) -> EvalResult<Primitive> {
    let [left, right] = arguments::<2>(args)?;
    Ok(Primitive::Boolean(left.as_bool()? && right.as_bool()?))
}

/// Boolean OR. Both operands are always evaluated.
pub fn or(args: &[Primitive]) -> EvalResult<Primitive> {
    let [left, right] = arguments::<2>(args)?;
    Ok(Primitive::Boolean(left.as_bool()? || right.as_bool()?))
}

/// The conditional operator `c ? a : b`.
///
/// Operands are evaluated before the handler runs, so an error in the branch
/// not taken still fails the formula.
///
/// # Example
/// ```
/// use parametra::interpreter::{evaluator::binary::logic::conditional, value::Primitive};
///
/// let r = conditional(&[Primitive::Boolean(false), Primitive::from("a"), Primitive::from("b")]);
/// assert_eq!(r.unwrap(), Primitive::from("b"));
/// ```
pub fn conditional(args: &[Primitive]) -> EvalResult<Primitive> {
    let [condition, then, otherwise] = arguments::<3>(args)?;
    Ok(if condition.as_bool()? { then } else { otherwise }.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_tables() {
        let t = Primitive::Boolean(true);
        let f = Primitive::Boolean(false);
        assert_eq!(and(&[t.clone(), f.clone()]), Ok(f.clone()));
        assert_eq!(or(&[t.clone(), f.clone()]), Ok(t.clone()));
        assert_eq!(conditional(&[t, Primitive::Number(1.0), f]), Ok(Primitive::Number(1.0)));
    }
}
