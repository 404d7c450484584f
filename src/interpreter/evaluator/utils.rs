use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            handler::{ArgKinds, Role},
        },
        value::core::Primitive,
    },
};

/// Checks that a call supplies exactly as many arguments as its handler
/// declares.
///
/// # Parameters
/// - `args`: The supplied arguments, evaluated or not.
/// - `expected`: Declared arity.
/// - `role`, `name`: The callee, for the error message.
///
/// # Example
/// ```
/// use parametra::interpreter::evaluator::{handler::Role, utils::check_arity};
///
/// assert!(check_arity(&[1, 2], 2, Role::Operator, "+").is_ok());
///
/// let err = check_arity(&[1, 2], 1, Role::Function, "sqrt").unwrap_err();
/// assert_eq!(err.to_string(), "Function 'sqrt' expects 1 arguments, got 2 instead.");
/// ```
pub fn check_arity<T>(args: &[T], expected: usize, role: Role, name: &str) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(EvalError::ArgumentCountMismatch { callee: role.callee(name),
                                               expected,
                                               found: args.len() })
    }
}

/// Checks every argument against the kinds accepted at its position.
///
/// Positions are reported one-based, and the accepted kinds are joined with
/// `or`.
pub fn check_kinds(values: &[Primitive],
                   kinds: &[ArgKinds],
                   role: Role,
                   name: &str)
                   -> EvalResult<()> {
    for (index, (value, accepted)) in values.iter().zip(kinds).enumerate() {
        if !accepted.iter().any(|pattern| pattern.accepts(value)) {
            let expected = accepted.iter()
                                   .map(|pattern| pattern.describe())
                                   .collect::<Vec<_>>()
                                   .join(" or ");
            return Err(EvalError::ArgumentKindMismatch { callee: role.callee(name),
                                                         position: index + 1,
                                                         expected,
                                                         found: value.kind().to_string() });
        }
    }
    Ok(())
}

/// Views the arguments of a handler as a fixed-size array.
///
/// The evaluator has already checked the arity, so a mismatch only occurs
/// when a handler is called directly with the wrong slice.
pub fn arguments<const N: usize>(args: &[Primitive]) -> EvalResult<&[Primitive; N]> {
    args.try_into()
        .map_err(|_| EvalError::InvalidArgument { details: format!("expected {N} arguments, got {}", args.len()) })
}

/// Error for two operands whose kinds cannot be combined by `operation`.
pub fn incompatible(operation: &'static str, left: &Primitive, right: &Primitive) -> EvalError {
    EvalError::IncompatibleKinds { operation,
                                   left: left.kind().to_string(),
                                   right: right.kind().to_string() }
}

/// Whether two numbers or quantities have the same kind: both plain numbers,
/// or both quantities of the same kind.
#[must_use]
pub fn same_scalar_kind(left: &Primitive, right: &Primitive) -> bool {
    match (left, right) {
        (Primitive::Number(_), Primitive::Number(_)) => true,
        (Primitive::Quantity(_, a), Primitive::Quantity(_, b)) => a == b,
        _ => false,
    }
}

/// The operand whose kind carries over to the result of a scaling operation:
/// the quantity if there is one, else the left operand.
#[must_use]
pub fn kind_carrier<'v>(left: &'v Primitive, right: &'v Primitive) -> &'v Primitive {
    if right.quantity_kind().is_some() { right } else { left }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::evaluator::handler::{ORDERED, SCALAR};

    #[test]
    fn kind_mismatch_names_position_and_kinds() {
        let err = check_kinds(&[Primitive::Number(1.0), Primitive::from(true)],
                              &[SCALAR, ORDERED],
                              Role::Operator,
                              "<").unwrap_err();
        assert_eq!(err,
                   EvalError::ArgumentKindMismatch { callee:   "Operator '<'".to_string(),
                                                     position: 2,
                                                     expected: "number or quantity or string".to_string(),
                                                     found:    "boolean".to_string(), });
    }

    #[test]
    fn same_kind() {
        let mm = Primitive::Quantity(1.0, "distance".to_string());
        let rad = Primitive::Quantity(1.0, "angle".to_string());
        assert!(same_scalar_kind(&mm, &mm));
        assert!(!same_scalar_kind(&mm, &rad));
        assert!(!same_scalar_kind(&Primitive::Number(1.0), &mm));
    }

    #[test]
    fn carrier_prefers_the_quantity() {
        let mm = Primitive::Quantity(1.0, "distance".to_string());
        let two = Primitive::Number(2.0);
        assert_eq!(kind_carrier(&two, &mm), &mm);
        assert_eq!(kind_carrier(&mm, &two), &mm);
        assert_eq!(kind_carrier(&two, &two), &two);
    }

    #[test]
    fn arguments_match_the_slice_length() {
        let args = [Primitive::Number(1.0), Primitive::Number(2.0)];
        assert!(arguments::<2>(&args).is_ok());
        assert!(arguments::<3>(&args).is_err());
    }
}
