//! Unit tests for the lexer module.
//!
//! Covers dimensioned numbers, selectors, variables, punctuation, comments
//! and error cases.

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.icss".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_dimensions() {
    let tokens = tokenize("12px 50% 3".to_string(), Some("test.icss".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Pixel);
    assert_eq!(tokens[0].value, "12px");
    assert_eq!(tokens[1].kind, TokenKind::Percentage);
    assert_eq!(tokens[1].value, "50%");
    assert_eq!(tokens[2].kind, TokenKind::Scalar);
    assert_eq!(tokens[2].value, "3");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_selectors() {
    let tokens = tokenize("p .menu #header".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "p");
    assert_eq!(tokens[1].kind, TokenKind::ClassSelector);
    assert_eq!(tokens[1].value, ".menu");
    assert_eq!(tokens[2].kind, TokenKind::Hash);
    assert_eq!(tokens[2].value, "#header");
}

#[test]
fn test_tokenize_variable_assignment() {
    assert_eq!(
        kinds("@link-color: #ff0000;"),
        vec![
            TokenKind::Variable,
            TokenKind::Colon,
            TokenKind::Hash,
            TokenKind::Semicolon,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_hyphenated_property() {
    let tokens = tokenize("background-color".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "background-color");
}

#[test]
fn test_tokenize_operators_and_punctuation() {
    assert_eq!(
        kinds("{ } ( ) : ; , + - *"),
        vec![
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_expression_without_spaces() {
    assert_eq!(
        kinds("10px-5px*2"),
        vec![
            TokenKind::Pixel,
            TokenKind::Dash,
            TokenKind::Pixel,
            TokenKind::Star,
            TokenKind::Scalar,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_skips_comments() {
    assert_eq!(
        kinds("// line comment\n/* block\n comment */ a"),
        vec![TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_token_positions() {
    let tokens = tokenize(".a { width: 1px; }".to_string(), None).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 2);
    assert_eq!(tokens[3].value, ":");
    assert_eq!(tokens[3].span.start.0, 10);
    assert_eq!(tokens[4].span.start.0, 12);
    assert_eq!(tokens[4].span.end.0, 15);
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("   \n\t"), vec![TokenKind::EOF]);
}

#[test]
fn test_unrecognised_token() {
    let error = tokenize(".a { width: $x; }".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 12);
}

#[test]
fn test_unterminated_block_comment() {
    let result = tokenize("/* never closed".to_string(), None);

    assert!(result.is_err());
}
