use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Span,
};

use super::{expressions::Expression, types::Property};

/// Node Trait
///
/// Implemented by every node the type checker may annotate with an error.
pub trait Node {
    /// Returns the span of the node.
    fn get_span(&self) -> &Span;
    /// Returns the error attached to this node, if any.
    fn get_error(&self) -> Option<&Error>;
    /// Attaches an error positioned at the start of the node.
    /// A later error replaces an earlier one.
    fn set_error(&mut self, error: ErrorImpl);
    fn has_error(&self) -> bool {
        self.get_error().is_some()
    }
}

/// The root of a parsed stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    pub body: Vec<BodyItem>,
    pub span: Span,
}

impl Stylesheet {
    /// Whether any node in the tree carries an error.
    pub fn has_errors(&self) -> bool {
        !self.collect_errors().is_empty()
    }

    /// Every attached error, in document order.
    pub fn collect_errors(&self) -> Vec<&Error> {
        let mut errors = vec![];
        collect_body_errors(&self.body, &mut errors);
        errors
    }
}

fn collect_body_errors<'a>(body: &'a [BodyItem], errors: &mut Vec<&'a Error>) {
    for item in body {
        match item {
            BodyItem::Stylerule(rule) => collect_body_errors(&rule.body, errors),
            BodyItem::VariableAssignment(assignment) => {
                assignment.expression.collect_errors(errors)
            }
            BodyItem::Declaration(declaration) => {
                declaration.expression.collect_errors(errors);
                errors.extend(declaration.error.as_ref());
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BodyItem {
    Stylerule(Stylerule),
    Declaration(Declaration),
    VariableAssignment(VariableAssignment),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    Tag(String),
    Class(String),
    Id(String),
}

impl Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Tag(name) => write!(f, "{}", name),
            Selector::Class(name) => write!(f, ".{}", name),
            Selector::Id(name) => write!(f, "#{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stylerule {
    pub selectors: Vec<Selector>,
    pub body: Vec<BodyItem>,
    pub span: Span,
}

impl Stylerule {
    /// Variables assigned inside a selector-qualified rule are local to it.
    pub fn opens_scope(&self) -> bool {
        !self.selectors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: Property,
    pub expression: Expression,
    pub span: Span,
    pub error: Option<Error>,
}

impl Node for Declaration {
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

#[derive(Debug, Clone, PartialEq)]
pub struct VariableAssignment {
    pub name: String,
    pub expression: Expression,
    pub span: Span,
}
