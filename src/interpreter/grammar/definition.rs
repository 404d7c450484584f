use once_cell::sync::Lazy;

use crate::{
    ast::ExpressionKind,
    interpreter::{
        grammar::{
            compile::{CompiledGrammar, compile},
            rule::{Field, GrammarRule, choice, operator, operators, repeat, rule, slot, token},
        },
        lexer::TokenKind,
    },
};

/// Binary operator levels, tightest first. Symbols on one level share a rank
/// and chain left to right.
const BINARY_LEVELS: &[&[&str]] = &[&["^"],
                                    &["*", "/", "%"],
                                    &["+", "-"],
                                    &["<<", ">>"],
                                    &["<", "<=", ">", ">="],
                                    &["==", "!="],
                                    &["&"],
                                    &["|"],
                                    &["&&"],
                                    &["||"]];

/// The rules of the formula language in declaration order.
///
/// Declaration order is significant twice over: it breaks ties between
/// alternatives that consume the same number of tokens, and the order of the
/// binary operator rules defines operator precedence.
#[must_use]
pub fn formula_rules() -> Vec<GrammarRule> {
    let mut rules = vec![
        rule(ExpressionKind::Group, vec![operator("("), slot(), operator(")")]),
        rule(ExpressionKind::Function,
             vec![token(TokenKind::Identifier).bind(Field::Name),
                  operator("("),
                  choice([vec![],
                          vec![slot(),
                               repeat(vec![operator(","), slot()]),
                               operator(",").optional()]]),
                  operator(")")]),
        rule(ExpressionKind::Quantity,
             vec![token(TokenKind::Number).bind(Field::Text),
                  token(TokenKind::Identifier).bind(Field::Unit)]),
        rule(ExpressionKind::Number, vec![token(TokenKind::Number).bind(Field::Text)]),
        rule(ExpressionKind::String, vec![token(TokenKind::String).bind(Field::Text)]),
        rule(ExpressionKind::Identifier, vec![token(TokenKind::Identifier).bind(Field::Name)]),
        rule(ExpressionKind::Unary, vec![operators(&["+", "-", "!"]), slot()]),
    ];

    rules.extend(BINARY_LEVELS.iter()
                              .map(|symbols| {
                                  rule(ExpressionKind::BinaryOperator,
                                       vec![slot(), operators(symbols), slot()])
                              }));

    rules.push(rule(ExpressionKind::TernaryOperator,
                    vec![slot(),
                         operator("?").bind(Field::Name),
                         slot(),
                         operator(":").bind(Field::Name),
                         slot()]));
    rules
}

/// The compiled formula grammar, built on first use and shared by every
/// parse for the rest of the process.
pub static FORMULA_GRAMMAR: Lazy<CompiledGrammar> = Lazy::new(|| compile(&formula_rules()));
