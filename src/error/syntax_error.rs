use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum SyntaxError {
    /// A token did not fit any grammar alternative at this position.
    UnexpectedToken {
        /// The kind of the offending token.
        kind:     TokenKind,
        /// The literal text of the offending token.
        text:     String,
        /// Index of the token in the token sequence.
        position: usize,
    },
    /// The tokens ran out while an alternative still expected more input.
    UnexpectedEndOfInput {
        /// Number of tokens in the sequence, i.e. the position of the end.
        position: usize,
    },
    /// A grammar alternative matched, but its captures do not form a node of
    /// its kind.
    MalformedNode {
        /// Index of the first token of the match.
        position: usize,
    },
    /// Nested expressions went deeper than the parser allows.
    TooDeep {
        /// Index of the first token of the expression that was too deep.
        position: usize,
    },
}

impl SyntaxError {
    /// Token index at which the failure was detected.
    ///
    /// Used to prefer the failure of the candidate that got furthest.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::MalformedNode { position }
            | Self::TooDeep { position } => *position,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { kind, text, position } => {
                write!(f, "Syntax error at token {position}: Unexpected {kind} '{text}'.")
            },
            Self::UnexpectedEndOfInput { .. } => {
                write!(f, "Syntax error: Unexpected end of input.")
            },
            Self::MalformedNode { position } => {
                write!(f, "Syntax error at token {position}: Incomplete expression.")
            },
            Self::TooDeep { position } => {
                write!(f, "Syntax error at token {position}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
