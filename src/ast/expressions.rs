use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Span,
};

use super::{ast::Node, types::ExpressionType};

/// A concrete value. Pixel, percentage and scalar literals carry a whole
/// number magnitude; colors carry their source text and take no part in
/// arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Pixel(i32),
    Percentage(i32),
    Scalar(i32),
    Color(String),
}

impl Literal {
    pub fn get_type(&self) -> ExpressionType {
        match self {
            Literal::Pixel(_) => ExpressionType::Pixel,
            Literal::Percentage(_) => ExpressionType::Percentage,
            Literal::Color(_) => ExpressionType::Color,
            Literal::Scalar(_) => ExpressionType::Scalar,
        }
    }

    pub fn magnitude(&self) -> Option<i32> {
        match self {
            Literal::Pixel(value) | Literal::Percentage(value) | Literal::Scalar(value) => {
                Some(*value)
            }
            Literal::Color(_) => None,
        }
    }

    /// Builds a literal of the same kind holding `magnitude`.
    pub fn with_magnitude(&self, magnitude: i32) -> Option<Literal> {
        match self {
            Literal::Pixel(_) => Some(Literal::Pixel(magnitude)),
            Literal::Percentage(_) => Some(Literal::Percentage(magnitude)),
            Literal::Scalar(_) => Some(Literal::Scalar(magnitude)),
            Literal::Color(_) => None,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Pixel(value) => write!(f, "{}px", value),
            Literal::Percentage(value) => write!(f, "{}%", value),
            Literal::Scalar(value) => write!(f, "{}", value),
            Literal::Color(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Add => write!(f, "+"),
            Operator::Subtract => write!(f, "-"),
            Operator::Multiply => write!(f, "*"),
        }
    }
}

/// Literal Expression
/// A literal value at a position in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Literal,
    pub span: Span,
}

/// Operation Expression
/// An arithmetic combination of two expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationExpr {
    pub operator: Operator,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
    pub span: Span,
    pub error: Option<Error>,
}

/// Variable Reference Expression
/// A use of a variable; the name keeps its leading `@`.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableReferenceExpr {
    pub name: String,
    pub span: Span,
    pub error: Option<Error>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(LiteralExpr),
    Operation(OperationExpr),
    VariableReference(VariableReferenceExpr),
}

impl Expression {
    pub fn literal(value: Literal, span: Span) -> Self {
        Expression::Literal(LiteralExpr { value, span })
    }

    pub fn operation(operator: Operator, lhs: Expression, rhs: Expression, span: Span) -> Self {
        Expression::Operation(OperationExpr {
            operator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            span,
            error: None,
        })
    }

    pub fn variable(name: impl Into<String>, span: Span) -> Self {
        Expression::VariableReference(VariableReferenceExpr {
            name: name.into(),
            span,
            error: None,
        })
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expression::Literal(literal) => &literal.span,
            Expression::Operation(operation) => &operation.span,
            Expression::VariableReference(reference) => &reference.span,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expression::Literal(literal) => Some(&literal.value),
            _ => None,
        }
    }

    /// Pushes every error attached inside this expression, operands first.
    pub fn collect_errors<'a>(&'a self, errors: &mut Vec<&'a Error>) {
        match self {
            Expression::Literal(_) => {}
            Expression::Operation(operation) => {
                operation.lhs.collect_errors(errors);
                operation.rhs.collect_errors(errors);
                errors.extend(operation.error.as_ref());
            }
            Expression::VariableReference(reference) => errors.extend(reference.error.as_ref()),
        }
    }
}

impl Node for OperationExpr {
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_error(&self) -> Option<&Error> {
        self.error.as_ref()
    }
    fn set_error(&mut self, error: ErrorImpl) {
        self.error = Some(Error::new(error, self.span.start.clone()));
    }
}

impl Node for VariableReferenceExpr {
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn get_error(&self) -> Option<&Error> {
        self.error.as_ref()
    }
    fn set_error(&mut self, error: ErrorImpl) {
        self.error = Some(Error::new(error, self.span.start.clone()));
    }
}
