//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a handler for a fixed piece of punctuation
//! - `MK_MATCH_HANDLER!` - Creates a handler that keeps the matched text
//!
//! The handler macros expect `Lexer`, `Regex` and `Token` to be in scope
//! where they are expanded.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Scalar, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer handler for a fixed single-token pattern.
///
/// The token covers exactly `$value`, and the lexer advances past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\{").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            let span = lexer.span_of($value.len());
            lexer.push(MK_TOKEN!($kind, String::from($value), span));
            lexer.advance_n($value.len());
        }
    };
}

/// Creates a lexer handler whose token value is the text the pattern matched.
#[macro_export]
macro_rules! MK_MATCH_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, regex: &Regex| {
            let Some(matched) = regex.find(lexer.remainder()) else {
                return;
            };
            let value = String::from(matched.as_str());
            let span = lexer.span_of(value.len());

            lexer.advance_n(value.len());
            lexer.push(MK_TOKEN!($kind, value, span));
        }
    };
}
