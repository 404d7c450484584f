use std::cmp::Ordering;

use crate::interpreter::{
    evaluator::{
        core::EvalResult,
        utils::{arguments, incompatible, same_scalar_kind},
    },
    value::core::Primitive,
};

/// Orders two values of the same kind: numbers, quantities of one kind, or
/// strings (lexicographically). `None` means the values are unordered, which
/// only happens with `NaN`.
///
/// # Errors
/// `IncompatibleKinds` when the operand kinds differ.
pub fn compare(left: &Primitive, right: &Primitive) -> EvalResult<Option<Ordering>> {
    match (left, right) {
        (Primitive::String(a), Primitive::String(b)) => Ok(Some(a.cmp(b))),
        _ if same_scalar_kind(left, right) => {
            Ok(left.as_magnitude()?.partial_cmp(&right.as_magnitude()?))
        },
        _ => Err(incompatible("compare", left, right)),
    }
}

macro_rules! ordering_operator {
    ($fname:ident, $doc:literal, $($accepted:pat_param)|+) => {
        #[doc = $doc]
        pub fn $fname(args: &[Primitive]) -> EvalResult<Primitive> {
            let [left, right] = arguments::<2>(args)?;
            Ok(Primitive::Boolean(matches!(compare(left, right)?, Some($($accepted)|+))))
        }
    };
}

ordering_operator!(less, "`<` on values of the same kind.", Ordering::Less);
ordering_operator!(less_equal, "`<=` on values of the same kind.", Ordering::Less | Ordering::Equal);
ordering_operator!(greater, "`>` on values of the same kind.", Ordering::Greater);
ordering_operator!(greater_equal,
                   "`>=` on values of the same kind.",
                   Ordering::Greater | Ordering::Equal);

/// Structural equality. Values of different kinds are never equal, and
/// comparing them is not an error.
///
/// # Example
/// ```
/// use parametra::interpreter::{evaluator::binary::comparison::equal, value::Primitive};
///
/// let r = equal(&[Primitive::Number(1.0), Primitive::from("1")]).unwrap();
/// assert_eq!(r, Primitive::Boolean(false));
/// ```
pub fn equal(args: &[Primitive]) -> EvalResult<Primitive> {
    let [left, right] = arguments::<2>(args)?;
    Ok(Primitive::Boolean(left == right))
}

/// Negated structural equality.
pub fn not_equal(args: &[Primitive]) -> EvalResult<Primitive> {
    let [left, right] = arguments::<2>(args)?;
    Ok(Primitive::Boolean(left != right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;

    fn mm(v: f64) -> Primitive {
        Primitive::Quantity(v, "distance".to_string())
    }

    #[test]
    fn ordering_within_a_kind() {
        assert_eq!(less(&[mm(1.0), mm(2.0)]), Ok(Primitive::Boolean(true)));
        assert_eq!(greater_equal(&[Primitive::Number(2.0), Primitive::Number(2.0)]),
                   Ok(Primitive::Boolean(true)));
        assert_eq!(less_equal(&[Primitive::from("b"), Primitive::from("a")]),
                   Ok(Primitive::Boolean(false)));
        assert_eq!(greater(&[Primitive::Number(f64::NAN), Primitive::Number(1.0)]),
                   Ok(Primitive::Boolean(false)));
    }

    #[test]
    fn ordering_across_kinds_fails() {
        assert_eq!(less(&[mm(1.0), Primitive::Number(2.0)]),
                   Err(EvalError::IncompatibleKinds { operation: "compare",
                                                      left:      "distance".to_string(),
                                                      right:     "number".to_string(), }));
    }

    #[test]
    fn equality_across_kinds_is_false() {
        assert_eq!(equal(&[mm(1.0), Primitive::Number(1.0)]), Ok(Primitive::Boolean(false)));
        assert_eq!(not_equal(&[mm(1.0), Primitive::Number(1.0)]), Ok(Primitive::Boolean(true)));
        assert_eq!(equal(&[mm(1.0), mm(1.0)]), Ok(Primitive::Boolean(true)));
    }
}
