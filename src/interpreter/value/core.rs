use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value of a formula.
///
/// Quantities carry their magnitude in the base unit of their kind, so two
/// quantities of the same kind can be combined without conversion. The kind
/// is an open tag owned by the unit table, such as `distance` or `angle`.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A plain, dimensionless number.
    Number(f64),
    /// A physical quantity: magnitude in base units and kind tag.
    Quantity(f64, String),
    /// A string.
    String(String),
    /// A boolean.
    Boolean(bool),
}

impl From<f64> for Primitive {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Primitive {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Primitive {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Primitive {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl Primitive {
    /// Name of the value's kind as used in error messages: `number`,
    /// `string`, `boolean`, or the quantity kind itself.
    ///
    /// # Example
    /// ```
    /// use parametra::interpreter::value::Primitive;
    ///
    /// assert_eq!(Primitive::Number(1.0).kind(), "number");
    /// assert_eq!(Primitive::Quantity(1.0, "distance".to_string()).kind(), "distance");
    /// ```
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Number(_) => "number",
            Self::Quantity(_, kind) => kind,
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
        }
    }

    /// The quantity kind, or `None` for any other value.
    #[must_use]
    pub fn quantity_kind(&self) -> Option<&str> {
        match self {
            Self::Quantity(_, kind) => Some(kind),
            _ => None,
        }
    }

    /// Magnitude of a number or quantity.
    ///
    /// # Errors
    /// `EvalError::InvalidArgument` for strings and booleans. Kind checks in
    /// the handler table normally rule this out before a handler runs.
    pub fn as_magnitude(&self) -> EvalResult<f64> {
        match self {
            Self::Number(v) | Self::Quantity(v, _) => Ok(*v),
            other => Err(other.unexpected("a number or quantity")),
        }
    }

    /// The contents of a string value.
    ///
    /// # Errors
    /// `EvalError::InvalidArgument` for any other value.
    pub fn as_str(&self) -> EvalResult<&str> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(other.unexpected("a string")),
        }
    }

    /// The truth value of a boolean.
    ///
    /// # Errors
    /// `EvalError::InvalidArgument` for any other value.
    pub fn as_bool(&self) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            other => Err(other.unexpected("a boolean")),
        }
    }

    /// A value of the same kind as `self` with a new magnitude: a quantity
    /// stays a quantity of its kind, anything else becomes a plain number.
    #[must_use]
    pub fn with_magnitude(&self, magnitude: f64) -> Self {
        match self {
            Self::Quantity(_, kind) => Self::Quantity(magnitude, kind.clone()),
            _ => Self::Number(magnitude),
        }
    }

    fn unexpected(&self, expected: &str) -> EvalError {
        EvalError::InvalidArgument { details: format!("expected {expected}, got {}", self.kind()) }
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Quantity(n, kind) => write!(f, "{n} [{kind}]"),
            Self::String(s) => f.write_str(s),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Primitive::Number(3.0).to_string(), "3");
        assert_eq!(Primitive::Number(0.5).to_string(), "0.5");
        assert_eq!(Primitive::Quantity(100.0, "distance".into()).to_string(), "100 [distance]");
        assert_eq!(Primitive::from("foo").to_string(), "foo");
        assert_eq!(Primitive::from(true).to_string(), "true");
    }

    #[test]
    fn magnitude_keeps_the_kind() {
        let length = Primitive::Quantity(2.0, "distance".into());
        assert_eq!(length.with_magnitude(5.0), Primitive::Quantity(5.0, "distance".into()));
        assert_eq!(Primitive::Number(2.0).with_magnitude(5.0), Primitive::Number(5.0));
        assert_eq!(Primitive::from(true).with_magnitude(1.0), Primitive::Number(1.0));
    }

    #[test]
    fn accessors_reject_other_kinds() {
        assert_eq!(Primitive::Quantity(4.0, "angle".into()).as_magnitude(), Ok(4.0));
        assert!(Primitive::from("x").as_magnitude().is_err());
        assert_eq!(Primitive::from("x").as_str(), Ok("x"));
        assert!(Primitive::Number(1.0).as_bool().is_err());
    }
}
