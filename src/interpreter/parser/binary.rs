use crate::{ast::Expression, interpreter::grammar::Precedence};

/// Attaches a binary operation to the running expression of a chain.
///
/// Without rotation every new operator would take the whole running
/// expression as its left operand, which is only correct for left-associative
/// chains of a single precedence level. Instead the new operator walks down the
/// right spine of the running tree while the operator found there binds
/// looser, and takes the operand it stops at as its left operand:
///
/// ```text
///     (x + y)   * z   =>   (x + (y * z))
///     (x * y)   + z   =>   ((x * y) + z)
/// ```
///
/// `open` is the number of spine levels the chain itself built and may
/// therefore reach into. Nodes below it came from a parenthesised group or a
/// single operand and are never re-associated. It is updated to cover the
/// newly inserted node.
///
/// # Parameters
/// - `running`: The expression built so far.
/// - `name`: The new operator symbol.
/// - `rhs`: The new operator's right operand.
/// - `open`: Depth of the rotatable part of the right spine.
/// - `precedence`: Operator ranks from the compiled grammar.
///
/// # Returns
/// The new running expression.
pub(in crate::interpreter::parser) fn graft(running: Expression,
                                            name: String,
                                            rhs: Expression,
                                            open: &mut usize,
                                            precedence: &Precedence)
                                            -> Expression {
    let (expression, depth) = insert(running, name, rhs, 0, *open, precedence);
    *open = depth + 1;
    expression
}

/// Inserts the operation at the first spine node that does not bind looser,
/// returning the rebuilt tree and the depth of the inserted node.
fn insert(node: Expression,
          name: String,
          rhs: Expression,
          depth: usize,
          open: usize,
          precedence: &Precedence)
          -> (Expression, usize) {
    match node {
        Expression::Binary { name: outer, args }
            if depth < open && precedence.binds_looser(&outer, &name) =>
        {
            let [left, right] = *args;
            let (right, inserted) = insert(right, name, rhs, depth + 1, open, precedence);
            (Expression::Binary { name: outer,
                                  args: Box::new([left, right]), },
             inserted)
        },
        node => (Expression::Binary { name,
                                      args: Box::new([node, rhs]), },
                 depth),
    }
}
