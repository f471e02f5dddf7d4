use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::ExpressionType, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The human-readable message, as attached to the node.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnknownProperty { .. } => "UnknownProperty",
            ErrorImpl::InvalidColor { .. } => "InvalidColor",
            ErrorImpl::VariableNotDefined { .. } => "VariableNotDefined",
            ErrorImpl::ColorInOperation => "ColorInOperation",
            ErrorImpl::OperandTypeMismatch => "OperandTypeMismatch",
            ErrorImpl::MissingScalarOperand => "MissingScalarOperand",
            ErrorImpl::PropertyTypeNotAllowed { .. } => "PropertyTypeNotAllowed",
            ErrorImpl::UnresolvedVariable { .. } => "UnresolvedVariable",
            ErrorImpl::IncompatibleOperands { .. } => "IncompatibleOperands",
            ErrorImpl::UnevaluatedExpression => "UnevaluatedExpression",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnknownProperty { property } => ErrorTip::Suggestion(format!(
                "Unknown property `{}`, expected one of color, background-color, width or height",
                property
            )),
            ErrorImpl::InvalidColor { token } => ErrorTip::Suggestion(format!(
                "Invalid color `{}`, colors are written as #rgb, #rrggbb or a color name",
                token
            )),
            ErrorImpl::UnresolvedVariable { .. }
            | ErrorImpl::IncompatibleOperands { .. }
            | ErrorImpl::UnevaluatedExpression => ErrorTip::Suggestion(format!(
                "{}, was the stylesheet type checked?",
                self.internal_error
            )),
            checked => ErrorTip::Suggestion(checked.to_string()),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexing and parsing
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unknown property {property:?}")]
    UnknownProperty { property: String },
    #[error("invalid color {token:?}")]
    InvalidColor { token: String },

    // Checking
    #[error("Variable '{variable}' not defined!")]
    VariableNotDefined { variable: String },
    #[error("An equation cannot contain a color.")]
    ColorInOperation,
    #[error("The types have to be equal to each other when adding or subtracting.")]
    OperandTypeMismatch,
    #[error("Multiplying requires one scalar type in the equation.")]
    MissingScalarOperand,
    #[error("An expression with the type of '{expression_type}' is not allowed on the {property} property.")]
    PropertyTypeNotAllowed {
        expression_type: ExpressionType,
        property: String,
    },

    // Evaluation and generation of an unchecked tree
    #[error("variable {variable:?} has no value in scope")]
    UnresolvedVariable { variable: String },
    #[error("operands of `{operator}` cannot be combined")]
    IncompatibleOperands { operator: String },
    #[error("expression was not evaluated to a literal")]
    UnevaluatedExpression,
}
