#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a formula.
pub enum LexError {
    /// A string literal was opened but never closed, possibly because the input
    /// ended on a dangling escape character.
    UnterminatedString {
        /// The string contents captured before the input ended.
        partial: String,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { partial } => {
                write!(f, "Unterminated string literal: \"{partial}")
            },
        }
    }
}

impl std::error::Error for LexError {}
