use crate::{
    ast::{Expression, ExpressionKind},
    error::SyntaxError,
    interpreter::grammar::{Alternative, Field},
};

/// Fields captured by an alternative while it is being matched.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Bindings {
    text: Option<String>,
    unit: Option<String>,
    name: Option<String>,
    args: Vec<Expression>,
}

impl Bindings {
    /// Stores `text` in `field`, appending when the field is already set.
    pub(crate) fn bind(&mut self, field: Field, text: &str) {
        let slot = match field {
            Field::Text => &mut self.text,
            Field::Unit => &mut self.unit,
            Field::Name => &mut self.name,
        };
        match slot {
            Some(existing) => existing.push_str(text),
            None => *slot = Some(text.to_string()),
        }
    }

    /// Appends a parsed sub-expression to the argument list.
    pub(crate) fn push(&mut self, arg: Expression) {
        self.args.push(arg);
    }
}

/// An alternative in flight: which pattern, how far along it is and what it
/// has captured so far.
///
/// Candidates are owned values. Advancing one never touches another, so a
/// failing candidate is simply dropped.
#[derive(Debug, Clone)]
pub(crate) struct Candidate<'g> {
    /// The pattern being matched.
    pub alternative: &'g Alternative,
    /// Index of the next matcher.
    pub cursor:      usize,
    /// Index of the next token.
    pub position:    usize,
    /// Captures so far.
    pub bindings:    Bindings,
}

impl<'g> Candidate<'g> {
    /// Starts matching `alternative` at `position`.
    ///
    /// When the candidate continues an already parsed expression its leading
    /// slot counts as matched. That expression stays with the caller and is
    /// only attached when the winning node is built.
    pub(crate) fn new(alternative: &'g Alternative, position: usize, continues: bool) -> Self {
        Self { alternative,
               cursor: usize::from(continues),
               position,
               bindings: Bindings::default() }
    }

    /// Whether every matcher has been consumed.
    pub(crate) fn is_complete(&self) -> bool {
        self.cursor >= self.alternative.matchers.len()
    }

    /// Converts a completed candidate into the result of a match starting at
    /// `start`.
    pub(crate) fn finish(self, start: usize) -> Match {
        Match { kind: self.alternative.kind,
                start,
                end: self.position,
                bindings: self.bindings }
    }
}

/// The winning alternative of one `consume_expression` call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Match {
    /// Kind of the node to build.
    pub kind:     ExpressionKind,
    /// First token of the match.
    pub start:    usize,
    /// One past the last consumed token.
    pub end:      usize,
    /// Captured fields, not including a leading expression.
    pub bindings: Bindings,
}

impl Match {
    /// Builds the expression node, placing `leading` before the captured
    /// arguments.
    pub(crate) fn build(self, leading: Option<Expression>) -> Result<Expression, SyntaxError> {
        let Bindings { text,
                       unit,
                       name,
                       mut args, } = self.bindings;
        if let Some(leading) = leading {
            args.insert(0, leading);
        }
        Expression::from_bindings(self.kind, text, unit, name, args)
            .ok_or(SyntaxError::MalformedNode { position: self.start })
    }

    /// Splits a binary operator continuation into its symbol and right operand.
    pub(crate) fn into_operator(self) -> Result<(String, Expression), SyntaxError> {
        let malformed = SyntaxError::MalformedNode { position: self.start };
        let Bindings { name, mut args, .. } = self.bindings;

        match (name, args.pop()) {
            (Some(name), Some(rhs)) if args.is_empty() => Ok((name, rhs)),
            _ => Err(malformed),
        }
    }
}
