//! Parser module for building the stylesheet AST.
//!
//! This module transforms a stream of tokens into a `Stylesheet`. Rules,
//! declarations and variable assignments are parsed by recursive descent;
//! expressions use a Pratt parser with NUD (null denotation) and LED (left
//! denotation) handlers, so `*` binds tighter than `+` and `-` and all three
//! associate to the left.
//!
//! The first syntax error stops parsing and is returned.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
