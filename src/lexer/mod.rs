//! Lexical analysis module for the stylesheet compiler.
//!
//! This module contains the lexer (tokenizer) that converts stylesheet
//! source into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using ordered regex patterns
//! - Recognition of dimensioned numbers, selectors, variables and identifiers
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
