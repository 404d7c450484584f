use crate::{
    ast::Expression,
    error::{EvalError, FormulaError},
    interpreter::{
        evaluator::{
            handler::{HandlerTable, Role},
            utils::{check_arity, check_kinds},
        },
        grammar::CompiledGrammar,
        lexer::tokenize,
        parser::parse,
        units::{STANDARD_UNITS, StandardUnits, UnitTable},
        value::core::Primitive,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

static DEFAULT_UNITS: StandardUnits = StandardUnits::new(STANDARD_UNITS);

/// Solves formulas against a grammar, a handler table and a unit table.
///
/// An evaluator holds no mutable state: solving the same text twice yields the
/// same result, and one evaluator can be shared freely.
///
/// # Example
/// ```
/// use parametra::interpreter::{
///     evaluator::{core::Evaluator, handler::HandlerTable},
///     grammar::FORMULA_GRAMMAR,
///     value::Primitive,
/// };
///
/// let handlers = HandlerTable::standard().with_constant("depth", 12.0);
/// let evaluator = Evaluator::new(&FORMULA_GRAMMAR, &handlers);
///
/// assert_eq!(evaluator.solve("depth / 4").unwrap(), Some(Primitive::Number(3.0)));
/// assert_eq!(evaluator.solve("").unwrap(), None);
/// ```
#[derive(Clone, Copy)]
pub struct Evaluator<'a> {
    grammar:  &'a CompiledGrammar,
    handlers: &'a HandlerTable,
    units:    &'a dyn UnitTable,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator using the standard unit table.
    #[must_use]
    pub fn new(grammar: &'a CompiledGrammar, handlers: &'a HandlerTable) -> Self {
        Self { grammar,
               handlers,
               units: &DEFAULT_UNITS }
    }

    /// Replaces the unit table used to resolve quantity literals.
    #[must_use]
    pub fn with_units(self, units: &'a dyn UnitTable) -> Self {
        Self { units, ..self }
    }

    /// Tokenizes, parses and evaluates `text`.
    ///
    /// # Returns
    /// The value of the formula, or `None` when the text holds no tokens.
    ///
    /// # Errors
    /// The first lexical, syntax or evaluation error encountered.
    #[tracing::instrument(level = "debug", skip(self), err(Display))]
    pub fn solve(&self, text: &str) -> Result<Option<Primitive>, FormulaError> {
        let Some(tree) = self.parse(text)? else {
            return Ok(None);
        };
        let value = self.evaluate(&tree)?;
        tracing::debug!(%tree, %value, "solved");
        Ok(Some(value))
    }

    /// Tokenizes and parses `text` without evaluating it.
    ///
    /// # Errors
    /// A lexical or syntax error.
    pub fn parse(&self, text: &str) -> Result<Option<Expression>, FormulaError> {
        let tokens = tokenize(text)?;
        Ok(parse(self.grammar, &tokens)?)
    }

    /// Evaluates an expression tree, children first.
    ///
    /// # Errors
    /// - `InvalidNumber` / `UnknownUnit` for literals the unit table rejects.
    /// - `UndefinedIdentifier` / `UndefinedHandler` for names with no entry in
    ///   the handler table.
    /// - `ArgumentCountMismatch` / `ArgumentKindMismatch` when arguments do not
    ///   fit the handler's declaration.
    /// - Any error raised by the handler itself.
    pub fn evaluate(&self, expression: &Expression) -> EvalResult<Primitive> {
        match expression {
            Expression::Number { text } => {
                self.units
                    .parse_number(text)
                    .map(Primitive::Number)
                    .ok_or_else(|| EvalError::InvalidNumber { text: text.clone() })
            },
            Expression::Quantity { text, unit } => self.eval_quantity(text, unit),
            Expression::String { text } => Ok(Primitive::String(text.clone())),
            Expression::Identifier { name } => {
                self.handlers
                    .constant(name)
                    .cloned()
                    .ok_or_else(|| EvalError::UndefinedIdentifier { name: name.clone() })
            },
            Expression::Call { name, args } => self.apply(Role::Function, name, args),
            Expression::Unary { name, arg } => {
                self.apply(Role::Unary, name, std::slice::from_ref(&**arg))
            },
            Expression::Binary { name, args } => self.apply(Role::Operator, name, &args[..]),
            Expression::Ternary { name, args } => self.apply(Role::Operator, name, &args[..]),
        }
    }

    /// Resolves a quantity literal into a base-unit magnitude and its kind.
    fn eval_quantity(&self, text: &str, unit: &str) -> EvalResult<Primitive> {
        let kind = self.units
                       .find_unit_kind(unit)
                       .ok_or_else(|| EvalError::UnknownUnit { unit: unit.to_string() })?;
        let literal = format!("{text}{unit}");

        match self.units.parse_quantity_to_base_unit(&literal, kind) {
            Some(value) => Ok(Primitive::Quantity(value, kind.to_string())),
            None => Err(EvalError::InvalidNumber { text: literal }),
        }
    }

    /// Looks up the handler for `name`, checks the arguments against its
    /// declaration and invokes it.
    fn apply(&self, role: Role, name: &str, args: &[Expression]) -> EvalResult<Primitive> {
        let handler = self.handlers
                          .find(role, name)
                          .ok_or_else(|| EvalError::UndefinedHandler { role: role.name(),
                                                                       name: name.to_string(), })?;

        check_arity(args, handler.arity(), role, name)?;

        let values = args.iter()
                         .map(|arg| self.evaluate(arg))
                         .collect::<EvalResult<Vec<_>>>()?;

        check_kinds(&values, handler.kinds, role, name)?;

        (handler.eval)(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{
        evaluator::handler::{Callable, Handler, NUMBER},
        grammar::FORMULA_GRAMMAR,
        units::{DISTANCE, Unit},
    };

    fn solve(text: &str) -> Result<Option<Primitive>, FormulaError> {
        let handlers = HandlerTable::standard();
        Evaluator::new(&FORMULA_GRAMMAR, &handlers).solve(text)
    }

    fn eval_error(text: &str) -> EvalError {
        match solve(text) {
            Err(FormulaError::Eval(e)) => e,
            other => panic!("expected an evaluation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_solves_to_nothing() {
        assert_eq!(solve(""), Ok(None));
        assert_eq!(solve("   "), Ok(None));
    }

    #[test]
    fn literals() {
        assert_eq!(solve("2.5"), Ok(Some(Primitive::Number(2.5))));
        assert_eq!(solve("\"abc\""), Ok(Some(Primitive::from("abc"))));
        assert_eq!(solve("true"), Ok(Some(Primitive::Boolean(true))));
        assert_eq!(solve("3cm"), Ok(Some(Primitive::Quantity(30.0, DISTANCE.to_string()))));
    }

    #[test]
    fn unknown_names() {
        assert_eq!(eval_error("3parsec"), EvalError::UnknownUnit { unit: "parsec".to_string() });
        assert_eq!(eval_error("width"),
                   EvalError::UndefinedIdentifier { name: "width".to_string() });
        assert_eq!(eval_error("frobnicate(1)"),
                   EvalError::UndefinedHandler { role: "function",
                                                 name: "frobnicate".to_string(), });
    }

    #[test]
    fn arity_is_checked_before_arguments_are_evaluated() {
        assert_eq!(eval_error("sin(undefined, 1)").to_string(),
                   "Function 'sin' expects 1 arguments, got 2 instead.");
    }

    #[test]
    fn kinds_are_checked_per_position() {
        assert_eq!(eval_error("1 + \"foo\"").to_string(),
                   "Operator '+' expects argument 2 to be number or quantity, got string instead.");
    }

    #[test]
    fn registered_functions_are_callable() {
        fn double(args: &[Primitive]) -> EvalResult<Primitive> {
            Ok(Primitive::Number(args[0].as_magnitude()? * 2.0))
        }

        let handlers = HandlerTable::standard().with_handler(Handler::Function(Callable::new("double",
                                                                                             &[NUMBER],
                                                                                             double)));
        let evaluator = Evaluator::new(&FORMULA_GRAMMAR, &handlers);
        assert_eq!(evaluator.solve("double(21)"), Ok(Some(Primitive::Number(42.0))));
    }

    #[test]
    fn custom_unit_table() {
        static CUSTOM: &[Unit] = &[Unit { suffix: "px",
                                          kind:   "pixels",
                                          factor: 1.0, }];
        let units = StandardUnits::new(CUSTOM);
        let handlers = HandlerTable::standard();
        let evaluator = Evaluator::new(&FORMULA_GRAMMAR, &handlers).with_units(&units);

        assert_eq!(evaluator.solve("4px * 2"),
                   Ok(Some(Primitive::Quantity(8.0, "pixels".to_string()))));
        assert!(evaluator.solve("4mm").is_err());
    }

    #[test]
    fn evaluation_is_repeatable() {
        let handlers = HandlerTable::standard();
        let evaluator = Evaluator::new(&FORMULA_GRAMMAR, &handlers);
        let tree = evaluator.parse("max(2mm, 1cm) / 2").unwrap().unwrap();
        assert_eq!(evaluator.evaluate(&tree), evaluator.evaluate(&tree));
    }
}
