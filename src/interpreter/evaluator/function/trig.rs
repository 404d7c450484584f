use crate::interpreter::{
    evaluator::{core::EvalResult, utils::arguments},
    units::ANGLE,
    value::core::Primitive,
};

/// Generates a trigonometric builtin. The argument is a plain number in
/// radians or an angle quantity, whose base unit is the radian; the result
/// is a plain number.
///
/// # Example
/// ```
/// use parametra::interpreter::{evaluator::function::trig::cos, value::Primitive};
///
/// let r = cos(&[Primitive::Quantity(0.0, "angle".into())]).unwrap();
/// assert_eq!(r, Primitive::Number(1.0));
/// ```
macro_rules! trig_builtin {
    ($fname:ident) => {
        #[doc = concat!("`", stringify!($fname), "` of an angle or a number of radians.")]
        pub fn $fname(args: &[Primitive]) -> EvalResult<Primitive> {
            let [angle] = arguments::<1>(args)?;
            Ok(Primitive::Number(angle.as_magnitude()?.$fname()))
        }
    };
}

trig_builtin!(sin);
trig_builtin!(cos);
trig_builtin!(tan);

/// Generates an inverse trigonometric builtin returning an angle quantity.
macro_rules! inverse_trig_builtin {
    ($fname:ident) => {
        #[doc = concat!("`", stringify!($fname), "` of a plain number, as an angle.")]
        pub fn $fname(args: &[Primitive]) -> EvalResult<Primitive> {
            let [value] = arguments::<1>(args)?;
            Ok(angle(value.as_magnitude()?.$fname()))
        }
    };
}

inverse_trig_builtin!(asin);
inverse_trig_builtin!(acos);
inverse_trig_builtin!(atan);

/// The angle of the point `(x, y)`, called as `atan2(y, x)`.
pub fn atan2(args: &[Primitive]) -> EvalResult<Primitive> {
    let [y, x] = arguments::<2>(args)?;
    Ok(angle(y.as_magnitude()?.atan2(x.as_magnitude()?)))
}

fn angle(radians: f64) -> Primitive {
    Primitive::Quantity(radians, ANGLE.to_string())
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn numbers_are_radians() {
        assert_eq!(sin(&[Primitive::Number(FRAC_PI_2)]), Ok(Primitive::Number(1.0)));
        assert_eq!(sin(&[Primitive::Quantity(FRAC_PI_2, ANGLE.to_string())]),
                   Ok(Primitive::Number(1.0)));
    }

    #[test]
    fn inverses_return_angles() {
        assert_eq!(asin(&[Primitive::Number(1.0)]), Ok(angle(FRAC_PI_2)));
        assert_eq!(atan2(&[Primitive::Number(1.0), Primitive::Number(0.0)]),
                   Ok(angle(FRAC_PI_2)));
        assert_eq!(acos(&[Primitive::Number(1.0)]), Ok(angle(0.0)));
    }
}
