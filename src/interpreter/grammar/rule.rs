use crate::{ast::ExpressionKind, interpreter::lexer::TokenKind};

/// Where a matched token's text is stored on the node being built.
///
/// Expression slots always append to the node's argument list. Binding the
/// same field twice concatenates the texts, which is how the ternary operator
/// gets its `?:` name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Literal text of numbers and strings.
    Text,
    /// Unit suffix of a quantity.
    Unit,
    /// Function name or operator symbol.
    Name,
}

/// One element of a rule body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Matches one token of `kind`, and when `literal` is set, only that exact
    /// text.
    Token {
        /// Required token kind.
        kind:     TokenKind,
        /// Required token text, if any.
        literal:  Option<&'static str>,
        /// Field receiving the token text, if any.
        field:    Option<Field>,
        /// Whether the token may be absent.
        optional: bool,
    },
    /// A nested expression, resolved recursively at parse time.
    Slot {
        /// Whether the expression may be absent.
        optional: bool,
    },
    /// Exactly one of several alternative sequences.
    Choice(Vec<Vec<Self>>),
    /// The body repeated any number of times below the unroll limit.
    Loop(Vec<Self>),
}

impl Element {
    /// Stores the matched text in `field`. Has no effect on anything but a
    /// token matcher.
    #[must_use]
    pub fn bind(self, field: Field) -> Self {
        match self {
            Self::Token { kind,
                          literal,
                          optional,
                          .. } => Self::Token { kind,
                                                literal,
                                                field: Some(field),
                                                optional },
            other => other,
        }
    }

    /// Marks a single token matcher or slot as optional. Choices and loops
    /// already express their own optionality and are returned unchanged.
    #[must_use]
    pub fn optional(self) -> Self {
        match self {
            Self::Token { kind,
                          literal,
                          field,
                          .. } => Self::Token { kind,
                                                literal,
                                                field,
                                                optional: true },
            Self::Slot { .. } => Self::Slot { optional: true },
            other => other,
        }
    }
}

/// Matches any token of `kind`.
#[must_use]
pub const fn token(kind: TokenKind) -> Element {
    Element::Token { kind,
                     literal: None,
                     field: None,
                     optional: false }
}

/// Matches the operator token with exactly this text.
#[must_use]
pub const fn operator(text: &'static str) -> Element {
    Element::Token { kind:     TokenKind::Operator,
                     literal:  Some(text),
                     field:    None,
                     optional: false, }
}

/// A nested expression.
#[must_use]
pub const fn slot() -> Element {
    Element::Slot { optional: false }
}

/// One of several sequences, tried as separate alternatives.
pub fn choice(branches: impl IntoIterator<Item = Vec<Element>>) -> Element {
    Element::Choice(branches.into_iter().collect())
}

/// One of several operator symbols, bound to the node's name.
pub fn operators(symbols: &[&'static str]) -> Element {
    choice(symbols.iter()
                  .map(|&symbol| vec![operator(symbol).bind(Field::Name)]))
}

/// The body repeated zero or more times.
#[must_use]
pub const fn repeat(body: Vec<Element>) -> Element {
    Element::Loop(body)
}

/// A named expression kind and the body that produces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarRule {
    /// The node kind built when the body matches.
    pub kind: ExpressionKind,
    /// The elements to match, in order.
    pub body: Vec<Element>,
}

/// Declares a rule.
#[must_use]
pub const fn rule(kind: ExpressionKind, body: Vec<Element>) -> GrammarRule {
    GrammarRule { kind, body }
}
