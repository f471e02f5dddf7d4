//! Error types and error handling for the stylesheet compiler.
//!
//! This module defines the error types used throughout the pipeline.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, parsing, checking and evaluation
//! - Error naming and suggestion tips for diagnostics
//!
//! Lexing and parsing errors are returned through `Result`. Checking errors
//! are never returned: the type checker attaches them to the offending nodes.

pub mod errors;
