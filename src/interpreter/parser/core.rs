use std::collections::HashMap;

use crate::{
    ast::{Expression, ExpressionKind},
    error::SyntaxError,
    interpreter::{
        grammar::{CompiledGrammar, Matcher},
        lexer::Token,
        parser::{
            binary::graft,
            candidate::{Candidate, Match},
        },
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// How many expression slots may be open inside each other, counting groups,
/// call arguments and operator operands.
pub const MAX_NESTING: usize = 64;

/// How much input a nested expression slot may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Depth {
    /// A single operand, without any operator chain after it.
    Shallow,
    /// The longest chain of continuations.
    Greedy,
}

/// Outcome of advancing one candidate by one matcher.
enum Step<'g> {
    Advanced(Candidate<'g>),
    Satisfied(Candidate<'g>),
    Failed(SyntaxError),
}

/// Parses a token sequence into a single expression.
///
/// The whole sequence must be consumed. An empty sequence is not an error and
/// yields `None`.
///
/// # Parameters
/// - `grammar`: The compiled grammar to match against.
/// - `tokens`: Tokens produced by the lexer.
///
/// # Returns
/// The expression tree spanning every token, or `None` for empty input.
///
/// # Errors
/// Returns the syntax error that was detected furthest into the input when no
/// expression covers all tokens, or `TooDeep` when the input nests more than
/// [`MAX_NESTING`] expressions.
///
/// # Example
/// ```
/// use parametra::interpreter::{grammar::FORMULA_GRAMMAR, lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("x - y - z").unwrap();
/// let tree = parse(&FORMULA_GRAMMAR, &tokens).unwrap().unwrap();
/// assert_eq!(tree.to_string(), "((x - y) - z)");
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(tokens = tokens.len()))]
pub fn parse(grammar: &CompiledGrammar, tokens: &[Token]) -> ParseResult<Option<Expression>> {
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut parser = Parser::new(grammar, tokens);
    match parser.greedy_consume_expression(0) {
        Ok((expression, end)) if end == tokens.len() => Ok(Some(expression)),
        _ => Err(parser.into_failure()),
    }
}

/// State of a single parse: the input, the grammar and a memo of nested
/// sub-parses keyed by position and depth.
pub struct Parser<'g, 't> {
    grammar:  &'g CompiledGrammar,
    tokens:   &'t [Token],
    memo:     HashMap<(usize, Depth), ParseResult<(Expression, usize)>>,
    furthest: Option<SyntaxError>,
    nesting:  usize,
    too_deep: Option<SyntaxError>,
}

impl<'g, 't> Parser<'g, 't> {
    /// Creates a parser over `tokens`.
    #[must_use]
    pub fn new(grammar: &'g CompiledGrammar, tokens: &'t [Token]) -> Self {
        Self { grammar,
               tokens,
               memo: HashMap::new(),
               furthest: None,
               nesting: 0,
               too_deep: None }
    }

    /// The failure detected furthest into the input so far. Hitting the
    /// nesting limit takes precedence over any other failure.
    fn into_failure(self) -> SyntaxError {
        let end = self.tokens.len();
        self.too_deep
            .or(self.furthest)
            .unwrap_or(SyntaxError::UnexpectedEndOfInput { position: end })
    }

    /// Keeps `error` if it was detected further than any earlier failure.
    fn record(&mut self, error: SyntaxError) -> SyntaxError {
        let further = self.furthest
                          .as_ref()
                          .is_none_or(|known| error.position() > known.position());
        if further {
            self.furthest = Some(error.clone());
        }
        error
    }

    /// Matches every eligible alternative at `position` and returns the best.
    ///
    /// With `continues` set only alternatives opening with an expression slot
    /// are tried, their leading slot standing for an expression the caller has
    /// already parsed. Otherwise only the remaining alternatives are tried.
    /// `shallow` additionally rules out binary operators.
    ///
    /// All candidates advance in lockstep, one matcher per round. The winner
    /// is the candidate that consumed the most tokens; ties go to the
    /// alternative declared first.
    ///
    /// # Errors
    /// When no candidate completes, the failure detected furthest into the
    /// input among them.
    pub(crate) fn consume_expression(&mut self,
                                     position: usize,
                                     continues: bool,
                                     shallow: bool)
                                     -> ParseResult<Match> {
        let grammar = self.grammar;
        let mut candidates = grammar.alternatives
                                    .iter()
                                    .filter(|alternative| alternative.starts_with_slot() == continues)
                                    .filter(|alternative| {
                                        !(shallow && alternative.kind == ExpressionKind::BinaryOperator)
                                    })
                                    .map(|alternative| Candidate::new(alternative, position, continues))
                                    .collect::<Vec<_>>();

        let mut satisfied = Vec::new();
        let mut failure: Option<SyntaxError> = None;

        while !candidates.is_empty() {
            let mut next = Vec::with_capacity(candidates.len());
            for candidate in candidates {
                match self.advance(candidate) {
                    Step::Advanced(candidate) => next.push(candidate),
                    Step::Satisfied(candidate) => satisfied.push(candidate),
                    Step::Failed(error) => {
                        if failure.as_ref()
                                  .is_none_or(|known| error.position() > known.position())
                        {
                            failure = Some(error);
                        }
                    },
                }
            }
            candidates = next;
        }

        satisfied.into_iter()
                 .max_by(|a, b| {
                     a.position
                      .cmp(&b.position)
                      .then_with(|| b.alternative.index.cmp(&a.alternative.index))
                 })
                 .map(|winner| winner.finish(position))
                 .ok_or_else(|| failure.unwrap_or(SyntaxError::UnexpectedEndOfInput { position }))
    }

    /// Parses an expression at `position` and extends it with continuations
    /// for as long as any alternative accepts the running result as its
    /// leading operand.
    ///
    /// Binary continuations are grafted into the running tree by precedence;
    /// any other continuation wraps the running tree as a whole.
    ///
    /// # Returns
    /// The expression and the position one past its last token.
    pub(crate) fn greedy_consume_expression(&mut self,
                                            position: usize)
                                            -> ParseResult<(Expression, usize)> {
        let first = self.consume_expression(position, false, false)?;
        let mut end = first.end;
        let mut running = first.build(None)?;
        let mut open = 0;

        loop {
            let extension = match self.consume_expression(end, true, false) {
                Ok(extension) => extension,
                Err(stop) => {
                    tracing::trace!(position = end, %stop, "expression chain ended");
                    break;
                },
            };
            end = extension.end;

            running = if extension.kind == ExpressionKind::BinaryOperator {
                let (name, rhs) = extension.into_operator()?;
                graft(running, name, rhs, &mut open, &self.grammar.precedence)
            } else {
                open = 0;
                extension.build(Some(running))?
            };
        }

        Ok((running, end))
    }

    /// Parses the nested expression of a slot, reusing an earlier result for
    /// the same position and depth.
    ///
    /// # Errors
    /// `TooDeep` once [`MAX_NESTING`] slots are already open. That failure is
    /// never memoized.
    fn sub_parse(&mut self, position: usize, depth: Depth) -> ParseResult<(Expression, usize)> {
        if let Some(known) = self.memo.get(&(position, depth)) {
            return known.clone();
        }

        if self.nesting >= MAX_NESTING {
            let error = SyntaxError::TooDeep { position };
            tracing::debug!(position, "nesting limit reached");
            self.too_deep.get_or_insert_with(|| error.clone());
            return Err(error);
        }

        self.nesting += 1;
        let result = match depth {
            Depth::Shallow => self.consume_expression(position, false, true)
                                  .and_then(|found| {
                                      let end = found.end;
                                      found.build(None).map(|expression| (expression, end))
                                  }),
            Depth::Greedy => self.greedy_consume_expression(position),
        };
        self.nesting -= 1;

        self.memo.insert((position, depth), result.clone());
        result
    }

    /// Moves a candidate past its next matcher.
    fn advance(&mut self, mut candidate: Candidate<'g>) -> Step<'g> {
        let Some(matcher) = candidate.alternative.matchers.get(candidate.cursor) else {
            return Step::Satisfied(candidate);
        };

        match matcher {
            Matcher::Token { kind,
                             literal,
                             field, } => match self.tokens.get(candidate.position) {
                Some(token)
                    if token.kind == *kind && literal.is_none_or(|literal| literal == token.text) =>
                {
                    if let Some(field) = field {
                        candidate.bindings.bind(*field, &token.text);
                    }
                    candidate.position += 1;
                },
                Some(token) => {
                    let error = SyntaxError::UnexpectedToken { kind:     token.kind,
                                                               text:     token.text.clone(),
                                                               position: candidate.position, };
                    return Step::Failed(self.record(error));
                },
                None => {
                    let error = SyntaxError::UnexpectedEndOfInput { position: candidate.position };
                    return Step::Failed(self.record(error));
                },
            },
            Matcher::Slot => {
                let depth = if candidate.alternative.kind.has_shallow_operands() {
                    Depth::Shallow
                } else {
                    Depth::Greedy
                };
                match self.sub_parse(candidate.position, depth) {
                    Ok((expression, end)) => {
                        candidate.bindings.push(expression);
                        candidate.position = end;
                    },
                    Err(error) => return Step::Failed(error),
                }
            },
        }

        candidate.cursor += 1;
        if candidate.is_complete() {
            Step::Satisfied(candidate)
        } else {
            Step::Advanced(candidate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{grammar::FORMULA_GRAMMAR, lexer::tokenize};

    fn tree(source: &str) -> String {
        let tokens = tokenize(source).unwrap();
        parse(&FORMULA_GRAMMAR, &tokens).unwrap().unwrap().to_string()
    }

    fn failure(source: &str) -> SyntaxError {
        let tokens = tokenize(source).unwrap();
        parse(&FORMULA_GRAMMAR, &tokens).unwrap_err()
    }

    #[test]
    fn empty_input_has_no_tree() {
        assert_eq!(parse(&FORMULA_GRAMMAR, &[]), Ok(None));
    }

    #[test]
    fn atoms() {
        assert_eq!(tree("42"), "42");
        assert_eq!(tree("10mm"), "10mm");
        assert_eq!(tree("\"hi\""), "\"hi\"");
        assert_eq!(tree("PI"), "PI");
    }

    #[test]
    fn left_associative_chains() {
        assert_eq!(tree("x - y - z"), "((x - y) - z)");
        assert_eq!(tree("a / b * c"), "((a / b) * c)");
        assert_eq!(tree("2 ^ 3 ^ 2"), "((2 ^ 3) ^ 2)");
    }

    #[test]
    fn precedence_rotation() {
        assert_eq!(tree("x + y * z"), "(x + (y * z))");
        assert_eq!(tree("x ^ y * z - x * y"), "(((x ^ y) * z) - (x * y))");
        assert_eq!(tree("a || b && c == d + 1"), "(a || (b && (c == (d + 1))))");
        assert_eq!(tree("a < b == c > d"), "((a < b) == (c > d))");
        assert_eq!(tree("1 << 2 + 3"), "(1 << (2 + 3))");
    }

    #[test]
    fn unary_chains() {
        assert_eq!(tree("1 + - + - 1"), "(1 + (-(+(-1))))");
        assert_eq!(tree("!a && b"), "((!a) && b)");
        assert_eq!(tree("-x * y"), "((-x) * y)");
    }

    #[test]
    fn groups_are_not_re_associated() {
        assert_eq!(tree("(a + b) * c"), "((a + b) * c)");
        assert_eq!(tree("1 + (a + b) * c"), "(1 + ((a + b) * c))");
        assert_eq!(tree("((x))"), "x");
    }

    #[test]
    fn calls() {
        assert_eq!(tree("f()"), "f()");
        assert_eq!(tree("max(1, 2 + 3, x)"), "max(1, (2 + 3), x)");
        assert_eq!(tree("f(1, 2,)"), "f(1, 2)");
        assert_eq!(tree("sin(30deg) * 2"), "(sin(30deg) * 2)");
        assert_eq!(tree("f(g(h(1)))"), "f(g(h(1)))");
    }

    #[test]
    fn conditional() {
        assert_eq!(tree("a > 1 ? b : c"), "((a > 1) ? b : c)");
        assert_eq!(tree("c ? a : b + 10"), "((c ? a : b) + 10)");
        assert_eq!(tree("c ? -a : (b + 1)"), "(c ? (-a) : (b + 1))");
        assert_eq!(tree("a ? b : c ? d : e"), "((a ? b : c) ? d : e)");
        assert_eq!(tree("(a ? b : c) + 1"), "((a ? b : c) + 1)");
    }

    #[test]
    fn conditional_branches_are_single_operands() {
        assert_eq!(failure("a > 1 ? b + 1 : c"),
                   SyntaxError::UnexpectedToken { kind:     crate::interpreter::lexer::TokenKind::Operator,
                                                  text:     "+".to_string(),
                                                  position: 5, });
    }

    #[test]
    fn leftover_input_is_reported() {
        assert_eq!(failure("1 + 2 )"),
                   SyntaxError::UnexpectedToken { kind:     crate::interpreter::lexer::TokenKind::Operator,
                                                  text:     ")".to_string(),
                                                  position: 3, });
        assert_eq!(failure("1 2").position(), 1);
    }

    #[test]
    fn missing_input_is_reported() {
        assert_eq!(failure("(1 + 2"), SyntaxError::UnexpectedEndOfInput { position: 4 });
        assert_eq!(failure("f("), SyntaxError::UnexpectedEndOfInput { position: 2 });
        assert_eq!(failure("-"), SyntaxError::UnexpectedEndOfInput { position: 1 });
    }

    #[test]
    fn the_furthest_failure_wins_over_the_latest() {
        // The last alternatives to fail are the operator continuations after
        // `f` at token 1; the call itself got as far as token 3.
        assert_eq!(failure("f(1 2)"),
                   SyntaxError::UnexpectedToken { kind:     crate::interpreter::lexer::TokenKind::Number,
                                                  text:     "2".to_string(),
                                                  position: 3, });

        let tokens = tokenize("1 + 2").unwrap();
        let mut parser = Parser::new(&FORMULA_GRAMMAR, &tokens);
        parser.record(SyntaxError::MalformedNode { position: 2 });
        parser.record(SyntaxError::UnexpectedEndOfInput { position: 3 });
        parser.record(SyntaxError::MalformedNode { position: 0 });
        parser.record(SyntaxError::MalformedNode { position: 3 });
        assert_eq!(parser.into_failure(), SyntaxError::UnexpectedEndOfInput { position: 3 });
    }

    fn nested(levels: usize) -> String {
        format!("{}1{}", "(".repeat(levels), ")".repeat(levels))
    }

    #[test]
    fn nesting_up_to_the_limit_parses() {
        assert_eq!(tree(&nested(MAX_NESTING)), "1");
        assert_eq!(tree(&format!("{}1", "-".repeat(MAX_NESTING))).matches('-').count(), MAX_NESTING);
    }

    #[test]
    fn nesting_past_the_limit_is_an_error() {
        // The innermost group's slot opens at token `MAX_NESTING + 1`.
        assert_eq!(failure(&nested(MAX_NESTING + 1)), SyntaxError::TooDeep { position: MAX_NESTING + 1 });
        assert_eq!(failure(&nested(10 * MAX_NESTING)).to_string(),
                   format!("Syntax error at token {}: Expression is nested too deeply.", MAX_NESTING + 1));
        assert!(matches!(failure(&format!("{}1", "-".repeat(MAX_NESTING + 1))),
                         SyntaxError::TooDeep { .. }));
    }

    #[test]
    fn eleven_arguments_do_not_fit() {
        assert!(parse(&FORMULA_GRAMMAR, &tokenize("f(1,2,3,4,5,6,7,8,9,10)").unwrap()).is_ok());
        assert!(parse(&FORMULA_GRAMMAR, &tokenize("f(1,2,3,4,5,6,7,8,9,10,11)").unwrap()).is_err());
    }
}
