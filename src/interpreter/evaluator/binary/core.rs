use crate::interpreter::evaluator::{
    binary::{arithmetic, bitwise, comparison, logic, power},
    handler::{ANY, BOOLEAN, Callable, NUMBER, ORDERED, SCALAR},
};

/// The standard binary operators and the ternary conditional.
///
/// The conditional is registered under the concatenation of its two symbols,
/// `?:`, which is the name the parser binds for it.
///
/// # Example
/// ```
/// use parametra::interpreter::evaluator::binary::core::OPERATORS;
///
/// let power = OPERATORS.iter().find(|op| op.name == "^").unwrap();
/// assert_eq!(power.arity(), 2);
/// ```
pub static OPERATORS: &[Callable] = &[Callable::new("+", &[SCALAR, SCALAR], arithmetic::add),
                                      Callable::new("-", &[SCALAR, SCALAR], arithmetic::sub),
                                      Callable::new("*", &[SCALAR, SCALAR], arithmetic::mul),
                                      Callable::new("/", &[SCALAR, SCALAR], arithmetic::div),
                                      Callable::new("%", &[SCALAR, NUMBER], power::rem),
                                      Callable::new("^", &[SCALAR, NUMBER], power::pow),
                                      Callable::new("<<", &[SCALAR, NUMBER], power::shl),
                                      Callable::new(">>", &[SCALAR, NUMBER], power::shr),
                                      Callable::new("<", &[ORDERED, ORDERED], comparison::less),
                                      Callable::new("<=", &[ORDERED, ORDERED], comparison::less_equal),
                                      Callable::new(">", &[ORDERED, ORDERED], comparison::greater),
                                      Callable::new(">=", &[ORDERED, ORDERED], comparison::greater_equal),
                                      Callable::new("==", &[ANY, ANY], comparison::equal),
                                      Callable::new("!=", &[ANY, ANY], comparison::not_equal),
                                      Callable::new("&", &[SCALAR, SCALAR], bitwise::bit_and),
                                      Callable::new("|", &[SCALAR, SCALAR], bitwise::bit_or),
                                      Callable::new("&&", &[BOOLEAN, BOOLEAN], logic::and),
                                      Callable::new("||", &[BOOLEAN, BOOLEAN], logic::or),
                                      Callable::new("?:", &[BOOLEAN, ANY, ANY], logic::conditional)];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::grammar::definition::FORMULA_GRAMMAR;

    #[test]
    fn every_precedence_symbol_has_an_operator() {
        for symbol in FORMULA_GRAMMAR.precedence.symbols() {
            assert!(OPERATORS.iter().any(|op| op.name == symbol), "missing operator {symbol}");
        }
    }

    #[test]
    fn names_are_unique() {
        for (i, op) in OPERATORS.iter().enumerate() {
            assert!(OPERATORS[i + 1..].iter().all(|other| other.name != op.name));
        }
    }
}
