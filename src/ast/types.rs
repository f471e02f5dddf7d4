//! Type definitions for the stylesheet AST.
//!
//! This module defines:
//!
//! - `ExpressionType`, the checker's classification of an expression
//! - `Property`, the closed set of properties a declaration may set, along
//!   with the expression types each one accepts

use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref PROPERTY_LOOKUP: HashMap<&'static str, Property> = {
        let mut map = HashMap::new();
        map.insert("color", Property::Color);
        map.insert("background-color", Property::BackgroundColor);
        map.insert("width", Property::Width);
        map.insert("height", Property::Height);
        map
    };
}

/// The dimension of an expression as seen by the type checker.
///
/// Only used during checking; the evaluated tree carries literals instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionType {
    Pixel,
    Percentage,
    Scalar,
    Color,
    Undefined,
}

impl Display for ExpressionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExpressionType::Pixel => "PIXEL",
            ExpressionType::Percentage => "PERCENTAGE",
            ExpressionType::Scalar => "SCALAR",
            ExpressionType::Color => "COLOR",
            ExpressionType::Undefined => "UNDEFINED",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Color,
    BackgroundColor,
    Width,
    Height,
}

impl Property {
    pub fn from_name(name: &str) -> Option<Property> {
        PROPERTY_LOOKUP.get(name).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Property::Color => "color",
            Property::BackgroundColor => "background-color",
            Property::Width => "width",
            Property::Height => "height",
        }
    }

    pub fn allowed_types(&self) -> &'static [ExpressionType] {
        match self {
            Property::Color | Property::BackgroundColor => &[ExpressionType::Color],
            Property::Width => &[ExpressionType::Percentage, ExpressionType::Pixel],
            Property::Height => &[ExpressionType::Pixel],
        }
    }

    pub fn allows(&self, expression_type: ExpressionType) -> bool {
        self.allowed_types().contains(&expression_type)
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
