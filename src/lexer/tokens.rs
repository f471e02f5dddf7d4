use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Color names accepted as color literals, with their hex value.
    pub static ref NAMED_COLORS: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        map.insert("black", "#000000");
        map.insert("white", "#ffffff");
        map.insert("red", "#ff0000");
        map.insert("green", "#008000");
        map.insert("blue", "#0000ff");
        map.insert("yellow", "#ffff00");
        map.insert("orange", "#ffa500");
        map.insert("purple", "#800080");
        map.insert("gray", "#808080");
        map.insert("grey", "#808080");
        map.insert("silver", "#c0c0c0");
        map.insert("navy", "#000080");
        map.insert("teal", "#008080");
        map.insert("maroon", "#800000");
        map.insert("transparent", "#00000000");
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,

    Pixel,      // 12px
    Percentage, // 50%
    Scalar,     // 3
    Hash,       // #ff0000, #menu
    ClassSelector,
    Variable,   // @name
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Colon,
    Semicolon,
    Comma,

    Plus,
    Dash,
    Star,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.value)
    }
}
