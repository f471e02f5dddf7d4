use crate::{
    ast::{
        ast::{BodyItem, Declaration, Selector, Stylerule, VariableAssignment},
        types::Property,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

/// Stylesheet level: variable assignments and stylerules.
pub fn parse_top_level_item(parser: &mut Parser) -> Result<BodyItem, Error> {
    match parser.current_token_kind() {
        TokenKind::Variable => Ok(BodyItem::VariableAssignment(parse_variable_assignment(parser)?)),
        _ => Ok(BodyItem::Stylerule(parse_stylerule(parser)?)),
    }
}

/// Rule body level: an identifier followed by `:` starts a declaration,
/// anything else that is not an assignment starts a nested rule.
pub fn parse_body_item(parser: &mut Parser) -> Result<BodyItem, Error> {
    match parser.current_token_kind() {
        TokenKind::Variable => Ok(BodyItem::VariableAssignment(parse_variable_assignment(parser)?)),
        TokenKind::Identifier if parser.peek_kind(1) == TokenKind::Colon => {
            Ok(BodyItem::Declaration(parse_declaration(parser)?))
        }
        _ => Ok(BodyItem::Stylerule(parse_stylerule(parser)?)),
    }
}

pub fn parse_variable_assignment(parser: &mut Parser) -> Result<VariableAssignment, Error> {
    let name = parser.expect(TokenKind::Variable)?;
    parser.expect(TokenKind::Colon)?;
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(VariableAssignment {
        name: name.value,
        expression,
        span: parser.span_from(&name.span.start),
    })
}

pub fn parse_stylerule(parser: &mut Parser) -> Result<Stylerule, Error> {
    let start = parser.get_position();
    let mut selectors = vec![parse_selector(parser)?];

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        selectors.push(parse_selector(parser)?);
    }

    parser.expect(TokenKind::OpenCurly)?;

    let mut body = vec![];

    while !matches!(parser.current_token_kind(), TokenKind::CloseCurly | TokenKind::EOF) {
        body.push(parse_body_item(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Stylerule {
        selectors,
        body,
        span: parser.span_from(&start),
    })
}

pub fn parse_selector(parser: &mut Parser) -> Result<Selector, Error> {
    let selector = match parser.current_token_kind() {
        TokenKind::Identifier => Selector::Tag(parser.current_token().value.clone()),
        TokenKind::ClassSelector => Selector::Class(parser.current_token().value[1..].to_string()),
        TokenKind::Hash => Selector::Id(parser.current_token().value[1..].to_string()),
        _ => return Err(parser.unexpected()),
    };
    parser.advance();

    Ok(selector)
}

pub fn parse_declaration(parser: &mut Parser) -> Result<Declaration, Error> {
    let name = parser.expect(TokenKind::Identifier)?;
    let Some(property) = Property::from_name(&name.value) else {
        return Err(Error::new(
            ErrorImpl::UnknownProperty { property: name.value },
            name.span.start,
        ));
    };

    parser.expect(TokenKind::Colon)?;
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Declaration {
        property,
        expression,
        span: parser.span_from(&name.span.start),
        error: None,
    })
}
