/// The syntactic category a grammar rule produces.
///
/// `Group` is transient: a parenthesised expression is replaced by its single
/// inner expression as soon as it is built, so no `Expression` ever carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    /// `( expr )`
    Group,
    /// `name(args...)`
    Function,
    /// A number immediately followed by a unit suffix, e.g. `10mm`.
    Quantity,
    /// A plain number literal.
    Number,
    /// A string literal.
    String,
    /// A bare name resolved to a constant at evaluation time.
    Identifier,
    /// A prefix operator applied to one operand.
    Unary,
    /// An infix operator applied to two operands.
    BinaryOperator,
    /// `cond ? a : b`
    TernaryOperator,
}

impl ExpressionKind {
    /// Whether expression slots of this kind only take a single operand.
    ///
    /// Operands of every operator, the conditional included, are parsed
    /// shallowly so they do not swallow the operator chain that follows them;
    /// chaining is left to the enclosing greedy parse. A compound branch needs
    /// parentheses.
    #[must_use]
    pub const fn has_shallow_operands(self) -> bool {
        matches!(self, Self::Unary | Self::BinaryOperator | Self::TernaryOperator)
    }
}

/// A node of the parsed expression tree.
///
/// Every tree produced by the parser spans exactly the tokens it was parsed
/// from. Literals keep their source text; conversion into runtime values is
/// left to the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A number literal such as `2.5e3`.
    Number {
        /// The literal text.
        text: String,
    },
    /// A number with a unit suffix such as `25mm`.
    Quantity {
        /// The number part.
        text: String,
        /// The unit suffix.
        unit: String,
    },
    /// A string literal with its escapes already resolved.
    String {
        /// The string contents.
        text: String,
    },
    /// A reference to a named constant.
    Identifier {
        /// The name.
        name: String,
    },
    /// A function call.
    Call {
        /// The function name.
        name: String,
        /// The arguments in call order.
        args: Vec<Self>,
    },
    /// A prefix operation such as `-x`.
    Unary {
        /// The operator symbol.
        name: String,
        /// The operand.
        arg:  Box<Self>,
    },
    /// An infix operation such as `a * b`.
    Binary {
        /// The operator symbol.
        name: String,
        /// Left and right operand.
        args: Box<[Self; 2]>,
    },
    /// A conditional such as `a ? b : c`.
    Ternary {
        /// The operator symbols, concatenated (`?:`).
        name: String,
        /// Condition, then-branch and else-branch.
        args: Box<[Self; 3]>,
    },
}

impl Expression {
    /// Builds a node of `kind` from the fields an alternative captured.
    ///
    /// A `Group` yields its single inner expression. Returns `None` when the
    /// captured operands do not fit the node shape.
    pub(crate) fn from_bindings(kind: ExpressionKind,
                                text: Option<String>,
                                unit: Option<String>,
                                name: Option<String>,
                                mut args: Vec<Self>)
                                -> Option<Self> {
        let node = match kind {
            ExpressionKind::Group => {
                if args.len() != 1 {
                    return None;
                }
                return args.pop();
            },
            ExpressionKind::Function => Self::Call { name: name?,
                                                     args },
            ExpressionKind::Quantity => Self::Quantity { text: text?,
                                                         unit: unit? },
            ExpressionKind::Number => Self::Number { text: text? },
            ExpressionKind::String => Self::String { text: text? },
            ExpressionKind::Identifier => Self::Identifier { name: name? },
            ExpressionKind::Unary => {
                let arg = args.pop()?;
                if !args.is_empty() {
                    return None;
                }
                Self::Unary { name: name?,
                              arg:  Box::new(arg), }
            },
            ExpressionKind::BinaryOperator => {
                let args: [Self; 2] = args.try_into().ok()?;
                Self::Binary { name: name?,
                               args: Box::new(args), }
            },
            ExpressionKind::TernaryOperator => {
                let args: [Self; 3] = args.try_into().ok()?;
                Self::Ternary { name: name?,
                                args: Box::new(args), }
            },
        };
        Some(node)
    }

    /// The kind of this node.
    #[must_use]
    pub const fn kind(&self) -> ExpressionKind {
        match self {
            Self::Number { .. } => ExpressionKind::Number,
            Self::Quantity { .. } => ExpressionKind::Quantity,
            Self::String { .. } => ExpressionKind::String,
            Self::Identifier { .. } => ExpressionKind::Identifier,
            Self::Call { .. } => ExpressionKind::Function,
            Self::Unary { .. } => ExpressionKind::Unary,
            Self::Binary { .. } => ExpressionKind::BinaryOperator,
            Self::Ternary { .. } => ExpressionKind::TernaryOperator,
        }
    }
}

/// Renders the tree fully parenthesised, so precedence and associativity are
/// visible: `x - y - z` prints as `((x - y) - z)`.
impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { text } => f.write_str(text),
            Self::Quantity { text, unit } => write!(f, "{text}{unit}"),
            Self::String { text } => {
                write!(f, "\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
            },
            Self::Identifier { name } => f.write_str(name),
            Self::Call { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
            Self::Unary { name, arg } => write!(f, "({name}{arg})"),
            Self::Binary { name, args } => write!(f, "({} {name} {})", args[0], args[1]),
            Self::Ternary { args, .. } => {
                write!(f, "({} ? {} : {})", args[0], args[1], args[2])
            },
        }
    }
}
