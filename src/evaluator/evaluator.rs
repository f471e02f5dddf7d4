use tracing::debug;

use crate::{
    ast::{
        ast::{Declaration, Stylesheet, VariableAssignment},
        expressions::{Expression, Literal, LiteralExpr, Operator},
    },
    errors::errors::{Error, ErrorImpl},
    scope::{
        scope::ScopeStack,
        walk::{walk_stylesheet, ScopedPass},
    },
};

#[derive(Debug, Default)]
pub struct Evaluator {
    scopes: ScopeStack<Literal>,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            scopes: ScopeStack::new(),
        }
    }

    /// Folds an expression to a literal, keeping the expression's span.
    pub fn fold(&self, expression: &Expression) -> Result<LiteralExpr, Error> {
        match expression {
            Expression::Literal(literal) => Ok(literal.clone()),
            Expression::VariableReference(reference) => match self.scopes.resolve(&reference.name) {
                Some(value) => Ok(LiteralExpr {
                    value: value.clone(),
                    span: reference.span.clone(),
                }),
                None => Err(Error::new(
                    ErrorImpl::UnresolvedVariable {
                        variable: reference.name.clone(),
                    },
                    reference.span.start.clone(),
                )),
            },
            Expression::Operation(operation) => {
                let lhs = self.fold(&operation.lhs)?;
                let rhs = self.fold(&operation.rhs)?;

                match apply_operator(operation.operator, &lhs.value, &rhs.value) {
                    Some(value) => Ok(LiteralExpr {
                        value,
                        span: operation.span.clone(),
                    }),
                    None => Err(Error::new(
                        ErrorImpl::IncompatibleOperands {
                            operator: operation.operator.to_string(),
                        },
                        operation.span.start.clone(),
                    )),
                }
            }
        }
    }
}

impl ScopedPass for Evaluator {
    type Binding = Literal;
    type Error = Error;

    fn scopes(&mut self) -> &mut ScopeStack<Literal> {
        &mut self.scopes
    }

    fn visit_variable_assignment(&mut self, assignment: &mut VariableAssignment) -> Result<(), Error> {
        let folded = self.fold(&assignment.expression)?;
        self.scopes.bind(assignment.name.clone(), folded.value.clone());
        assignment.expression = Expression::Literal(folded);

        Ok(())
    }

    fn visit_declaration(&mut self, declaration: &mut Declaration) -> Result<(), Error> {
        declaration.expression = Expression::Literal(self.fold(&declaration.expression)?);

        Ok(())
    }
}

/// Computes one operation over two literals.
///
/// Addition and subtraction need operands of the same kind and keep it.
/// Multiplication needs a scalar on at least one side; the other side
/// supplies the kind of the result. Returns `None` for any other pairing.
pub fn apply_operator(operator: Operator, lhs: &Literal, rhs: &Literal) -> Option<Literal> {
    match operator {
        Operator::Add | Operator::Subtract => {
            if lhs.get_type() != rhs.get_type() {
                return None;
            }

            let (a, b) = (lhs.magnitude()?, rhs.magnitude()?);
            let result = if operator == Operator::Add {
                a.wrapping_add(b)
            } else {
                a.wrapping_sub(b)
            };

            lhs.with_magnitude(result)
        }
        Operator::Multiply => match (lhs, rhs) {
            (Literal::Scalar(factor), other) | (other, Literal::Scalar(factor)) => {
                other.with_magnitude(factor.wrapping_mul(other.magnitude()?))
            }
            _ => None,
        },
    }
}

/// Returns a copy of `ast` with every declaration and assignment folded
/// to a literal.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate(ast: &Stylesheet) -> Result<Stylesheet, Error> {
    let mut evaluated = ast.clone();
    walk_stylesheet(&mut Evaluator::new(), &mut evaluated)?;

    debug!("evaluation finished");
    Ok(evaluated)
}
