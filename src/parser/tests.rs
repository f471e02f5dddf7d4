//! Unit tests for the parser module.
//!
//! This module contains tests for parsing stylesheets including:
//! - Variable assignments
//! - Stylerules with tag, class and id selectors
//! - Nested rules
//! - Expression precedence and grouping
//! - Syntax errors

use std::rc::Rc;

use crate::{
    ast::{
        ast::{BodyItem, Selector, Stylesheet},
        expressions::{Expression, Literal, Operator},
        types::Property,
    },
    errors::errors::Error,
    lexer::lexer::tokenize,
};

use super::parser::parse;

fn parse_source(source: &str) -> Result<Stylesheet, Error> {
    let tokens = tokenize(source.to_string(), Some("test.icss".to_string())).unwrap();
    parse(tokens, Rc::new("test.icss".to_string()))
}

/// Renders an expression fully parenthesised.
fn render(expression: &Expression) -> String {
    match expression {
        Expression::Literal(literal) => literal.value.to_string(),
        Expression::VariableReference(reference) => reference.name.clone(),
        Expression::Operation(operation) => format!(
            "({} {} {})",
            render(&operation.lhs),
            operation.operator,
            render(&operation.rhs)
        ),
    }
}

fn first_declaration_expression(source: &str) -> String {
    let ast = parse_source(source).unwrap();
    let BodyItem::Stylerule(rule) = &ast.body[0] else {
        panic!("expected a stylerule");
    };
    let BodyItem::Declaration(declaration) = &rule.body[0] else {
        panic!("expected a declaration");
    };
    render(&declaration.expression)
}

#[test]
fn test_parse_variable_assignment() {
    let ast = parse_source("@x: 10px;").unwrap();

    let BodyItem::VariableAssignment(assignment) = &ast.body[0] else {
        panic!("expected an assignment");
    };
    assert_eq!(assignment.name, "@x");
    assert_eq!(assignment.expression.as_literal(), Some(&Literal::Pixel(10)));
}

#[test]
fn test_parse_stylerule_with_declarations() {
    let ast = parse_source(".a { width: 10px; color: #ff0000; }").unwrap();

    let BodyItem::Stylerule(rule) = &ast.body[0] else {
        panic!("expected a stylerule");
    };
    assert_eq!(rule.selectors, vec![Selector::Class("a".to_string())]);
    assert_eq!(rule.body.len(), 2);

    let BodyItem::Declaration(declaration) = &rule.body[1] else {
        panic!("expected a declaration");
    };
    assert_eq!(declaration.property, Property::Color);
    assert_eq!(
        declaration.expression.as_literal(),
        Some(&Literal::Color("#ff0000".to_string()))
    );
}

#[test]
fn test_parse_selector_kinds() {
    let ast = parse_source("p, .menu, #header { height: 1px; }").unwrap();

    let BodyItem::Stylerule(rule) = &ast.body[0] else {
        panic!("expected a stylerule");
    };
    assert_eq!(
        rule.selectors,
        vec![
            Selector::Tag("p".to_string()),
            Selector::Class("menu".to_string()),
            Selector::Id("header".to_string())
        ]
    );
}

#[test]
fn test_parse_nested_rule() {
    let ast = parse_source(".a { @w: 1px; p { width: @w; } height: 2px; }").unwrap();

    let BodyItem::Stylerule(rule) = &ast.body[0] else {
        panic!("expected a stylerule");
    };
    assert!(matches!(rule.body[0], BodyItem::VariableAssignment(_)));
    assert!(matches!(rule.body[1], BodyItem::Stylerule(_)));
    assert!(matches!(rule.body[2], BodyItem::Declaration(_)));
}

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(
        first_declaration_expression(".a { width: 1px + 2px * 3; }"),
        "(1px + (2px * 3))"
    );
    assert_eq!(
        first_declaration_expression(".a { width: 2 * 3px - 1px; }"),
        "((2 * 3px) - 1px)"
    );
}

#[test]
fn test_operators_are_left_associative() {
    assert_eq!(
        first_declaration_expression(".a { width: 10px - 2px - 3px; }"),
        "((10px - 2px) - 3px)"
    );
}

#[test]
fn test_grouping() {
    assert_eq!(
        first_declaration_expression(".a { width: (1px + @x) * 2; }"),
        "((1px + @x) * 2)"
    );
}

#[test]
fn test_operation_span_covers_operands() {
    let source = ".a { width: 1px + 2px; }";
    let ast = parse_source(source).unwrap();

    let BodyItem::Stylerule(rule) = &ast.body[0] else {
        panic!("expected a stylerule");
    };
    let BodyItem::Declaration(declaration) = &rule.body[0] else {
        panic!("expected a declaration");
    };
    let Expression::Operation(operation) = &declaration.expression else {
        panic!("expected an operation");
    };

    assert_eq!(operation.operator, Operator::Add);
    assert_eq!(operation.span.start.0 as usize, source.find("1px").unwrap());
    assert_eq!(operation.span.end.0 as usize, source.find(";").unwrap());
}

#[test]
fn test_named_and_short_colors() {
    assert_eq!(first_declaration_expression(".a { color: red; }"), "red");
    assert_eq!(first_declaration_expression(".a { color: #fff; }"), "#fff");
}

#[test]
fn test_invalid_color() {
    let error = parse_source(".a { color: #ggg; }").unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidColor");

    let error = parse_source(".a { color: auto; }").unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidColor");
}

#[test]
fn test_unknown_property() {
    let error = parse_source(".a { margin: 1px; }").unwrap_err();

    assert_eq!(error.get_error_name(), "UnknownProperty");
    assert_eq!(error.get_position().0, 5);
}

#[test]
fn test_missing_semicolon() {
    let error = parse_source(".a { width: 1px }").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_unclosed_rule() {
    assert!(parse_source(".a { width: 1px;").is_err());
}

#[test]
fn test_number_too_large() {
    let error = parse_source("@x: 99999999999px;").unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_empty_stylesheet() {
    let ast = parse_source("").unwrap();

    assert!(ast.body.is_empty());
}

#[test]
fn test_parse_without_eof_token() {
    let mut tokens = tokenize("@x: 1;".to_string(), None).unwrap();
    tokens.pop();

    assert!(parse(tokens, Rc::new("stdin".to_string())).is_ok());
    assert!(parse(vec![], Rc::new("stdin".to_string())).is_ok());
}
