use std::borrow::Cow;

use crate::interpreter::{evaluator::core::EvalResult, value::core::Primitive};

/// Signature shared by every operator and function implementation.
///
/// Handlers receive already evaluated arguments whose count and kinds have
/// been checked against the handler's declaration.
pub type HandlerFn = fn(&[Primitive]) -> EvalResult<Primitive>;

/// A kind constraint on one argument position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindPattern {
    /// A plain number.
    Number,
    /// A string.
    String,
    /// A boolean.
    Boolean,
    /// A quantity of any kind.
    AnyQuantity,
    /// A quantity of exactly this kind.
    Quantity(&'static str),
    /// Any value at all.
    Any,
}

impl KindPattern {
    /// Whether `value` satisfies the pattern.
    #[must_use]
    pub fn accepts(&self, value: &Primitive) -> bool {
        match (self, value) {
            (Self::Any, _)
            | (Self::Number, Primitive::Number(_))
            | (Self::String, Primitive::String(_))
            | (Self::Boolean, Primitive::Boolean(_))
            | (Self::AnyQuantity, Primitive::Quantity(..)) => true,
            (Self::Quantity(expected), Primitive::Quantity(_, kind)) => kind == expected,
            _ => false,
        }
    }

    /// The pattern as it reads in error messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::AnyQuantity => "quantity",
            Self::Quantity(kind) => *kind,
            Self::Any => "any value",
        }
    }
}

/// The accepted kinds of one argument position; a value matching any of the
/// patterns is accepted.
pub type ArgKinds = &'static [KindPattern];

/// Plain numbers only.
pub const NUMBER: ArgKinds = &[KindPattern::Number];
/// Plain numbers or quantities of any kind.
pub const SCALAR: ArgKinds = &[KindPattern::Number, KindPattern::AnyQuantity];
/// Strings only.
pub const STRING: ArgKinds = &[KindPattern::String];
/// Booleans only.
pub const BOOLEAN: ArgKinds = &[KindPattern::Boolean];
/// Anything.
pub const ANY: ArgKinds = &[KindPattern::Any];
/// Plain numbers, taken as radians, or angles.
pub const ANGLE_OR_NUMBER: ArgKinds =
    &[KindPattern::Number, KindPattern::Quantity(crate::interpreter::units::ANGLE)];
/// Values with a natural order: numbers, quantities and strings.
pub const ORDERED: ArgKinds = &[KindPattern::Number, KindPattern::AnyQuantity, KindPattern::String];

/// The syntactic role a handler is looked up under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// A prefix operator.
    Unary,
    /// A binary or ternary operator.
    Operator,
    /// A called function.
    Function,
}

impl Role {
    /// Name of the role in "undefined" errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unary => "unary operator",
            Self::Operator => "operator",
            Self::Function => "function",
        }
    }

    /// Describes a callee of this role in argument errors, e.g.
    /// `Function 'sin'`.
    #[must_use]
    pub fn callee(self, name: &str) -> String {
        match self {
            Self::Unary | Self::Operator => format!("Operator '{name}'"),
            Self::Function => format!("Function '{name}'"),
        }
    }
}

/// A typed operator or function implementation.
///
/// The arity is the number of argument positions in `kinds`.
#[derive(Debug, Clone)]
pub struct Callable {
    /// Function name or operator symbol.
    pub name:  &'static str,
    /// Accepted kinds per argument position.
    pub kinds: &'static [ArgKinds],
    /// The implementation.
    pub eval:  HandlerFn,
}

impl Callable {
    /// Declares a callable with a static name.
    #[must_use]
    pub const fn new(name: &'static str, kinds: &'static [ArgKinds], eval: HandlerFn) -> Self {
        Self { name, kinds, eval }
    }

    /// Declared number of arguments.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.kinds.len()
    }
}

/// One entry of a handler table.
#[derive(Debug, Clone)]
pub enum Handler {
    /// A named value, referenced by a bare identifier.
    Constant {
        /// The identifier.
        name:  Cow<'static, str>,
        /// The value it stands for.
        value: Primitive,
    },
    /// A prefix operator.
    Unary(Callable),
    /// A binary or ternary operator.
    Operator(Callable),
    /// A function.
    Function(Callable),
}

impl Handler {
    /// Declares a constant.
    pub fn constant(name: impl Into<Cow<'static, str>>, value: impl Into<Primitive>) -> Self {
        Self::Constant { name:  name.into(),
                         value: value.into(), }
    }

    /// The name the entry is registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Constant { name, .. } => name,
            Self::Unary(callable) | Self::Operator(callable) | Self::Function(callable) => {
                callable.name
            },
        }
    }

    fn callable(&self, role: Role) -> Option<&Callable> {
        match (self, role) {
            (Self::Unary(callable), Role::Unary)
            | (Self::Operator(callable), Role::Operator)
            | (Self::Function(callable), Role::Function) => Some(callable),
            _ => None,
        }
    }
}

/// An ordered catalogue of constants, operators and functions.
///
/// Lookups scan in registration order and return the first entry with a
/// matching role and name; later registrations of the same name are shadowed.
///
/// # Example
/// ```
/// use parametra::interpreter::{evaluator::handler::HandlerTable, value::Primitive};
///
/// let table = HandlerTable::standard().with_constant("width", 40.0);
/// assert_eq!(table.constant("width"), Some(&Primitive::Number(40.0)));
/// assert!(table.constant("PI").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HandlerTable {
    entries: Vec<Handler>,
}

impl HandlerTable {
    /// An empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// A table holding the standard library: constants, operators and
    /// functions.
    #[must_use]
    pub fn standard() -> Self {
        crate::interpreter::evaluator::library::standard_handlers().collect()
    }

    /// Appends an entry.
    pub fn register(&mut self, handler: Handler) {
        tracing::trace!(name = handler.name(), "registered handler");
        self.entries.push(handler);
    }

    /// Appends an entry, builder style.
    #[must_use]
    pub fn with_handler(mut self, handler: Handler) -> Self {
        self.register(handler);
        self
    }

    /// Appends a constant, builder style.
    #[must_use]
    pub fn with_constant(self,
                         name: impl Into<Cow<'static, str>>,
                         value: impl Into<Primitive>)
                         -> Self {
        self.with_handler(Handler::constant(name, value))
    }

    /// The value of the first constant registered as `name`.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<&Primitive> {
        self.entries.iter().find_map(|entry| match entry {
                               Handler::Constant { name: known, value } if known == name => {
                                   Some(value)
                               },
                               _ => None,
                           })
    }

    /// The first operator or function registered for `role` under `name`.
    #[must_use]
    pub fn find(&self, role: Role, name: &str) -> Option<&Callable> {
        self.entries
            .iter()
            .filter_map(|entry| entry.callable(role))
            .find(|callable| callable.name == name)
    }

    /// Number of entries, shadowed ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Handler> {
        self.entries.iter()
    }
}

impl FromIterator<Handler> for HandlerTable {
    fn from_iter<I: IntoIterator<Item = Handler>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl Extend<Handler> for HandlerTable {
    fn extend<I: IntoIterator<Item = Handler>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
