use crate::error::{EvalError, LexError, SyntaxError};

#[derive(Debug, Clone, PartialEq)]
/// Any failure raised while solving a formula, tagged by pipeline stage.
pub enum FormulaError {
    /// The text could not be tokenized.
    Lex(LexError),
    /// The tokens did not form a single expression.
    Syntax(SyntaxError),
    /// The expression tree could not be evaluated.
    Eval(EvalError),
}

impl From<LexError> for FormulaError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for FormulaError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<EvalError> for FormulaError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Syntax(e) => e.fmt(f),
            Self::Eval(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for FormulaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
