#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum EvalError {
    /// A number literal could not be parsed.
    InvalidNumber {
        /// The literal text.
        text: String,
    },
    /// A quantity literal used a suffix the unit table does not know.
    UnknownUnit {
        /// The unit suffix.
        unit: String,
    },
    /// An identifier did not resolve to a constant.
    UndefinedIdentifier {
        /// The identifier.
        name: String,
    },
    /// No handler is registered for a function, unary or binary operator.
    UndefinedHandler {
        /// Which kind of handler was looked up, e.g. `function` or `operator`.
        role: &'static str,
        /// The function name or operator symbol.
        name: String,
    },
    /// The wrong number of arguments was supplied to a handler.
    ArgumentCountMismatch {
        /// Description of the callee, e.g. `Function 'sin'`.
        callee:   String,
        /// Declared arity.
        expected: usize,
        /// Supplied argument count.
        found:    usize,
    },
    /// An argument had a kind the handler does not accept at that position.
    ArgumentKindMismatch {
        /// Description of the callee, e.g. `Operator '+'`.
        callee:   String,
        /// One-based argument position.
        position: usize,
        /// The accepted kinds, already joined for display.
        expected: String,
        /// The kind actually supplied.
        found:    String,
    },
    /// Attempted division by a zero value.
    DivisionByZero,
    /// An operation was applied to two quantities or values whose kinds do not
    /// combine, e.g. adding a distance to an angle.
    IncompatibleKinds {
        /// Verb describing the operation, e.g. `add`.
        operation: &'static str,
        /// Kind of the left operand.
        left:      String,
        /// Kind of the right operand.
        right:     String,
    },
    /// A value with a fractional part was used where an integer was required.
    RealIsFractional {
        /// The offending value.
        value: f64,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { text } => write!(f, "Invalid number literal '{text}'."),
            Self::UnknownUnit { unit } => write!(f, "Unknown unit '{unit}'."),
            Self::UndefinedIdentifier { name } => write!(f, "Undefined identifier '{name}'."),
            Self::UndefinedHandler { role, name } => write!(f, "Undefined {role} '{name}'."),
            Self::ArgumentCountMismatch { callee,
                                          expected,
                                          found, } => {
                write!(f, "{callee} expects {expected} arguments, got {found} instead.")
            },
            Self::ArgumentKindMismatch { callee,
                                         position,
                                         expected,
                                         found, } => write!(f,
                                                            "{callee} expects argument {position} to be {expected}, got {found} instead."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::IncompatibleKinds { operation,
                                      left,
                                      right, } => {
                write!(f, "Cannot {operation} {left} and {right}.")
            },
            Self::RealIsFractional { value } => write!(f,
                                                       "Value {value} is fractional and cannot be used as an integer."),
            Self::InvalidArgument { details } => write!(f, "Invalid argument: {details}."),
        }
    }
}

impl std::error::Error for EvalError {}
