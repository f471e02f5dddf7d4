use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    ast::expressions::{Expression, Literal, Operator},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, NAMED_COLORS},
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

lazy_static! {
    static ref HEX_COLOR: Regex = Regex::new("^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();
}

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected());
    };

    let mut left = nud(parser)?;

    // While the current token binds tighter than `bp`, keep extending the lhs
    while parser.current_binding_power() > bp {
        let token_kind = parser.current_token_kind();
        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(parser.unexpected());
        };

        let binding_power = parser.current_binding_power();
        left = led(parser, left, binding_power)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    let value = match token.kind {
        TokenKind::Pixel => Literal::Pixel(parse_magnitude(&token, "px")?),
        TokenKind::Percentage => Literal::Percentage(parse_magnitude(&token, "%")?),
        TokenKind::Scalar => Literal::Scalar(parse_magnitude(&token, "")?),
        TokenKind::Hash => {
            if !HEX_COLOR.is_match(&token.value) {
                return Err(Error::new(
                    ErrorImpl::InvalidColor { token: token.value },
                    token.span.start,
                ));
            }
            Literal::Color(token.value.clone())
        }
        TokenKind::Identifier => {
            if !NAMED_COLORS.contains_key(token.value.as_str()) {
                return Err(Error::new(
                    ErrorImpl::InvalidColor { token: token.value },
                    token.span.start,
                ));
            }
            Literal::Color(token.value.clone())
        }
        TokenKind::Variable => {
            parser.advance();
            return Ok(Expression::variable(token.value, token.span));
        }
        _ => return Err(parser.unexpected()),
    };

    parser.advance();
    Ok(Expression::literal(value, token.span))
}

fn parse_magnitude(token: &Token, suffix: &str) -> Result<i32, Error> {
    token
        .value
        .strip_suffix(suffix)
        .unwrap_or(&token.value)
        .parse()
        .map_err(|_| {
            Error::new(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            )
        })
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expression, bp: BindingPower) -> Result<Expression, Error> {
    let operator = match parser.current_token_kind() {
        TokenKind::Plus => Operator::Add,
        TokenKind::Dash => Operator::Subtract,
        TokenKind::Star => Operator::Multiply,
        _ => return Err(parser.unexpected()),
    };
    parser.advance();

    let right = parse_expr(parser, bp)?;
    let span = Span {
        start: left.get_span().start.clone(),
        end: right.get_span().end.clone(),
    };

    Ok(Expression::operation(operator, left, right, span))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}
