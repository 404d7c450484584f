use crate::{
    ast::ExpressionKind,
    interpreter::{
        grammar::rule::{Element, Field, GrammarRule},
        lexer::TokenKind,
    },
};

/// Loops are unrolled into sequences of fewer than this many repetitions.
///
/// A construct that needs more repetitions, such as a call with more than
/// ten arguments, cannot be matched.
pub const LOOP_UNROLL_LIMIT: usize = 10;

/// One element of a compiled alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Matches one token.
    Token {
        /// Required token kind.
        kind:    TokenKind,
        /// Required token text, if any.
        literal: Option<&'static str>,
        /// Field receiving the token text, if any.
        field:   Option<Field>,
    },
    /// Matches a nested expression and appends it to the node's arguments.
    Slot,
}

/// A fully linear match pattern produced by flattening one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    /// The node kind built when every matcher succeeds.
    pub kind:     ExpressionKind,
    /// Declaration order of the alternative across the whole grammar.
    pub index:    usize,
    /// The matchers, in order.
    pub matchers: Vec<Matcher>,
}

impl Alternative {
    /// Whether the pattern opens with an expression slot, i.e. continues an
    /// expression that has already been parsed.
    #[must_use]
    pub fn starts_with_slot(&self) -> bool {
        matches!(self.matchers.first(), Some(Matcher::Slot))
    }

    /// The first literal operator in the pattern, which for a binary operator
    /// alternative is its symbol.
    #[must_use]
    pub fn operator_symbol(&self) -> Option<&'static str> {
        self.matchers.iter().find_map(|matcher| match matcher {
                                Matcher::Token { kind: TokenKind::Operator,
                                                 literal: Some(symbol),
                                                 .. } => Some(*symbol),
                                _ => None,
                            })
    }
}

/// Binding strength of binary operators.
///
/// Ranks come from the declaration order of binary operator rules: the first
/// rule binds tightest and gets rank 0. Ranks are per rule, not per symbol:
/// symbols declared in the same rule share a rank, so `a - b + c` chains to
/// the left instead of grouping `b + c` by symbol order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Precedence {
    ranks: Vec<(&'static str, u32)>,
}

impl Precedence {
    /// Rank of `symbol`, lower binds tighter.
    #[must_use]
    pub fn rank(&self, symbol: &str) -> Option<u32> {
        self.ranks
            .iter()
            .find(|(known, _)| *known == symbol)
            .map(|(_, rank)| *rank)
    }

    /// Whether `outer` binds strictly looser than `inner`, meaning an `inner`
    /// operation that follows an `outer` one belongs inside its right operand.
    #[must_use]
    pub fn binds_looser(&self, outer: &str, inner: &str) -> bool {
        match (self.rank(outer), self.rank(inner)) {
            (Some(outer), Some(inner)) => outer > inner,
            _ => false,
        }
    }

    /// All ranked symbols in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ranks.iter().map(|(symbol, _)| *symbol)
    }

    fn insert(&mut self, symbol: &'static str, rank: u32) {
        if self.rank(symbol).is_none() {
            self.ranks.push((symbol, rank));
        }
    }
}

/// The flattened grammar: every alternative of every rule plus the
/// precedence table. Immutable once built and shared by all parses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledGrammar {
    /// All alternatives, in declaration order.
    pub alternatives: Vec<Alternative>,
    /// Binary operator ranks.
    pub precedence:   Precedence,
}

/// Compiles declarative rules into concrete alternatives.
///
/// Every choice, loop and optional element is expanded so that each resulting
/// alternative is a plain sequence of matchers. The function is total: the
/// grammar is fixed program data, not user input.
///
/// # Example
/// ```
/// use parametra::{
///     ast::ExpressionKind,
///     interpreter::grammar::{
///         compile,
///         rule::{operator, rule, slot},
///     },
/// };
///
/// let grammar = compile(&[rule(ExpressionKind::Group, vec![operator("("), slot(), operator(")")])]);
/// assert_eq!(grammar.alternatives.len(), 1);
/// assert_eq!(grammar.alternatives[0].matchers.len(), 3);
/// ```
#[must_use]
pub fn compile(rules: &[GrammarRule]) -> CompiledGrammar {
    let mut grammar = CompiledGrammar::default();
    let mut binary_rules = 0;

    for rule in rules {
        let first = grammar.alternatives.len();

        for matchers in flatten(&rule.body) {
            let index = grammar.alternatives.len();
            grammar.alternatives.push(Alternative { kind: rule.kind,
                                                    index,
                                                    matchers });
        }

        if rule.kind == ExpressionKind::BinaryOperator {
            for alternative in &grammar.alternatives[first..] {
                if let Some(symbol) = alternative.operator_symbol() {
                    grammar.precedence.insert(symbol, binary_rules);
                }
            }
            binary_rules += 1;
        }
    }

    tracing::debug!(rules = rules.len(),
                    alternatives = grammar.alternatives.len(),
                    operators = grammar.precedence.ranks.len(),
                    "compiled grammar");
    grammar
}

/// Expands a rule body into every linear sequence it can match.
fn flatten(elements: &[Element]) -> Vec<Vec<Matcher>> {
    let mut paths = vec![Vec::new()];

    for element in elements {
        paths = match element {
            Element::Token { kind,
                             literal,
                             field,
                             optional, } => {
                let matcher = Matcher::Token { kind:    *kind,
                                               literal: *literal,
                                               field:   *field, };
                append(paths, &matcher, *optional)
            },
            Element::Slot { optional } => append(paths, &Matcher::Slot, *optional),
            Element::Choice(branches) => {
                let tails = branches.iter()
                                    .flat_map(|branch| flatten(branch))
                                    .collect::<Vec<_>>();
                cross(&paths, &tails)
            },
            Element::Loop(body) => cross(&paths, &unroll(&flatten(body))),
        };
    }

    paths
}

/// Appends `matcher` to every path, keeping a copy without it when optional.
fn append(paths: Vec<Vec<Matcher>>, matcher: &Matcher, optional: bool) -> Vec<Vec<Matcher>> {
    let mut out = Vec::with_capacity(if optional { paths.len() * 2 } else { paths.len() });

    for path in paths {
        if optional {
            out.push(path.clone());
        }
        let mut path = path;
        path.push(matcher.clone());
        out.push(path);
    }

    out
}

/// Every prefix followed by every tail.
fn cross(prefixes: &[Vec<Matcher>], tails: &[Vec<Matcher>]) -> Vec<Vec<Matcher>> {
    prefixes.iter()
            .flat_map(|prefix| {
                tails.iter().map(move |tail| {
                                let mut path = prefix.clone();
                                path.extend(tail.iter().cloned());
                                path
                            })
            })
            .collect()
}

/// Sequences of zero up to `LOOP_UNROLL_LIMIT - 1` repetitions of the body.
fn unroll(body: &[Vec<Matcher>]) -> Vec<Vec<Matcher>> {
    let mut repetitions = vec![Vec::new()];
    let mut all = repetitions.clone();

    for _ in 1..LOOP_UNROLL_LIMIT {
        repetitions = cross(&repetitions, body);
        all.extend(repetitions.iter().cloned());
    }

    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::grammar::rule::{choice, operator, operators, repeat, rule, slot, token};

    #[test]
    fn optional_elements_double_the_paths() {
        let grammar = compile(&[rule(ExpressionKind::Number,
                                     vec![token(TokenKind::Number).bind(Field::Text),
                                          operator("%").optional()])]);
        let lengths = grammar.alternatives
                             .iter()
                             .map(|alternative| alternative.matchers.len())
                             .collect::<Vec<_>>();
        assert_eq!(lengths, vec![1, 2]);
    }

    #[test]
    fn choices_cross_with_their_prefix() {
        let grammar = compile(&[rule(ExpressionKind::Unary,
                                     vec![operators(&["+", "-", "!"]), slot()])]);
        assert_eq!(grammar.alternatives.len(), 3);
        assert!(grammar.alternatives
                       .iter()
                       .all(|alternative| alternative.matchers.len() == 2));
        assert_eq!(grammar.alternatives[1].operator_symbol(), Some("-"));
    }

    #[test]
    fn loops_unroll_below_the_limit() {
        let grammar = compile(&[rule(ExpressionKind::Function,
                                     vec![slot(), repeat(vec![operator(","), slot()])])]);
        assert_eq!(grammar.alternatives.len(), LOOP_UNROLL_LIMIT);
        let longest = grammar.alternatives
                             .iter()
                             .map(|alternative| alternative.matchers.len())
                             .max();
        assert_eq!(longest, Some(1 + 2 * (LOOP_UNROLL_LIMIT - 1)));
    }

    #[test]
    fn empty_choice_branch_is_an_empty_sequence() {
        let grammar = compile(&[rule(ExpressionKind::Function,
                                     vec![operator("("), choice([vec![], vec![slot()]]), operator(")")])]);
        let lengths = grammar.alternatives
                             .iter()
                             .map(|alternative| alternative.matchers.len())
                             .collect::<Vec<_>>();
        assert_eq!(lengths, vec![2, 3]);
    }

    #[test]
    fn precedence_follows_rule_order() {
        let binary = |symbols: &[&'static str]| {
            rule(ExpressionKind::BinaryOperator, vec![slot(), operators(symbols), slot()])
        };
        let grammar = compile(&[binary(&["*", "/"]), binary(&["+", "-"]), binary(&["*"])]);

        assert_eq!(grammar.precedence.symbols().collect::<Vec<_>>(), vec!["*", "/", "+", "-"]);
        assert_eq!(grammar.precedence.rank("/"), Some(0));
        assert_eq!(grammar.precedence.rank("-"), Some(1));
        assert!(grammar.precedence.binds_looser("+", "*"));
        assert!(!grammar.precedence.binds_looser("-", "+"));
        assert!(!grammar.precedence.binds_looser("+", "-"));
        assert_eq!(grammar.precedence.rank("+"), grammar.precedence.rank("-"));
        assert!(!grammar.precedence.binds_looser("?", "+"));
    }

    #[test]
    fn alternatives_are_indexed_in_declaration_order() {
        let grammar = compile(&[rule(ExpressionKind::Number, vec![token(TokenKind::Number)]),
                                rule(ExpressionKind::Unary, vec![operators(&["+", "-"]), slot()])]);
        let indices = grammar.alternatives
                             .iter()
                             .map(|alternative| alternative.index)
                             .collect::<Vec<_>>();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
