use std::convert::Infallible;

use tracing::debug;

use crate::{
    ast::{
        ast::{Declaration, Node, Stylesheet, VariableAssignment},
        expressions::{Expression, OperationExpr, Operator, VariableReferenceExpr},
        types::ExpressionType,
    },
    errors::errors::ErrorImpl,
    scope::{
        scope::ScopeStack,
        walk::{walk_stylesheet, ScopedPass},
    },
};

#[derive(Debug, Default)]
pub struct TypeChecker {
    scopes: ScopeStack<ExpressionType>,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker {
            scopes: ScopeStack::new(),
        }
    }

    /// Infers the type of an expression, annotating every operation and
    /// reference inside it that fails validation.
    pub fn check_expression(&mut self, expression: &mut Expression) -> ExpressionType {
        match expression {
            Expression::Literal(literal) => literal.value.get_type(),
            Expression::Operation(operation) => self.check_operation(operation),
            Expression::VariableReference(reference) => self.check_variable_reference(reference),
        }
    }

    fn check_operation(&mut self, operation: &mut OperationExpr) -> ExpressionType {
        let lhs_type = self.check_expression(&mut operation.lhs);
        let rhs_type = self.check_expression(&mut operation.rhs);

        if let Some(error) = operation_error(operation.operator, lhs_type, rhs_type) {
            operation.set_error(error);
        }

        operation_type(lhs_type, rhs_type)
    }

    fn check_variable_reference(&mut self, reference: &mut VariableReferenceExpr) -> ExpressionType {
        match self.scopes.resolve(&reference.name) {
            Some(expression_type) => *expression_type,
            None => {
                reference.set_error(ErrorImpl::VariableNotDefined {
                    variable: reference.name.clone(),
                });
                ExpressionType::Undefined
            }
        }
    }
}

impl ScopedPass for TypeChecker {
    type Binding = ExpressionType;
    type Error = Infallible;

    fn scopes(&mut self) -> &mut ScopeStack<ExpressionType> {
        &mut self.scopes
    }

    fn visit_variable_assignment(&mut self, assignment: &mut VariableAssignment) -> Result<(), Infallible> {
        let expression_type = self.check_expression(&mut assignment.expression);
        self.scopes.bind(assignment.name.clone(), expression_type);

        Ok(())
    }

    fn visit_declaration(&mut self, declaration: &mut Declaration) -> Result<(), Infallible> {
        let expression_type = self.check_expression(&mut declaration.expression);

        if !declaration.property.allows(expression_type) {
            declaration.set_error(ErrorImpl::PropertyTypeNotAllowed {
                expression_type,
                property: declaration.property.name().to_string(),
            });
        }

        Ok(())
    }
}

/// The type of an operation given its operand types. A scalar on the left
/// takes the type of its partner; otherwise the left side decides.
pub fn operation_type(lhs: ExpressionType, rhs: ExpressionType) -> ExpressionType {
    if lhs == ExpressionType::Scalar {
        rhs
    } else {
        lhs
    }
}

/// Validates the operand types of one operation.
///
/// A color on either side is reported before anything else.
pub fn operation_error(operator: Operator, lhs: ExpressionType, rhs: ExpressionType) -> Option<ErrorImpl> {
    if lhs == ExpressionType::Color || rhs == ExpressionType::Color {
        return Some(ErrorImpl::ColorInOperation);
    }

    match operator {
        Operator::Add | Operator::Subtract if lhs != rhs => Some(ErrorImpl::OperandTypeMismatch),
        Operator::Multiply if lhs != ExpressionType::Scalar && rhs != ExpressionType::Scalar => {
            Some(ErrorImpl::MissingScalarOperand)
        }
        _ => None,
    }
}

/// Checks a whole stylesheet, attaching errors to the nodes they concern.
#[tracing::instrument(level = "debug", skip_all)]
pub fn type_check(ast: &mut Stylesheet) {
    let mut type_checker = TypeChecker::new();

    match walk_stylesheet(&mut type_checker, ast) {
        Ok(()) => {}
        Err(never) => match never {},
    }

    debug!(errors = ast.collect_errors().len(), "type checking finished");
}
