use std::f64::consts::{E, PI, TAU};

use once_cell::sync::Lazy;

use crate::interpreter::{
    evaluator::{
        binary::core::OPERATORS,
        function::core::BUILTIN_TABLE,
        handler::{Handler, HandlerTable},
        unary::UNARY_OPERATORS,
    },
    value::core::Primitive,
};

/// The named constants of the standard library.
#[must_use]
pub fn constants() -> [Handler; 5] {
    [Handler::constant("true", true),
     Handler::constant("false", false),
     Handler::constant("PI", PI),
     Handler::constant("TAU", TAU),
     Handler::constant("E", E)]
}

/// Every standard entry: constants first, then unary operators, binary
/// operators and functions.
pub fn standard_handlers() -> impl Iterator<Item = Handler> {
    constants().into_iter()
               .chain(UNARY_OPERATORS.iter().cloned().map(Handler::Unary))
               .chain(OPERATORS.iter().cloned().map(Handler::Operator))
               .chain(BUILTIN_TABLE.iter().cloned().map(Handler::Function))
}

/// The process-wide standard handler table, built on first use.
pub static STANDARD_HANDLERS: Lazy<HandlerTable> = Lazy::new(HandlerTable::standard);

/// Looks up a standard constant by name.
///
/// # Example
/// ```
/// use parametra::interpreter::{evaluator::library::standard_constant, value::Primitive};
///
/// assert_eq!(standard_constant("true"), Some(Primitive::Boolean(true)));
/// assert_eq!(standard_constant("tau"), None);
/// ```
#[must_use]
pub fn standard_constant(name: &str) -> Option<Primitive> {
    STANDARD_HANDLERS.constant(name).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::evaluator::handler::Role;

    #[test]
    fn catalogue_is_complete() {
        let table = &*STANDARD_HANDLERS;
        assert_eq!(table.len(),
                   5 + UNARY_OPERATORS.len() + OPERATORS.len() + BUILTIN_TABLE.len());
        assert!(table.find(Role::Unary, "!").is_some());
        assert!(table.find(Role::Operator, "?:").is_some());
        assert!(table.find(Role::Function, "regex_replace").is_some());
        assert!(table.find(Role::Function, "+").is_none());
    }

    #[test]
    fn constants_are_case_sensitive() {
        assert_eq!(standard_constant("PI"), Some(Primitive::Number(PI)));
        assert_eq!(standard_constant("pi"), None);
        assert_eq!(standard_constant("E"), Some(Primitive::Number(E)));
    }
}
