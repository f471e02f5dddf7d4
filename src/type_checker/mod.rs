//! Type checking and semantic analysis module.
//!
//! This module checks a parsed stylesheet without stopping at the first
//! problem. It:
//!
//! - Infers the type of every expression
//! - Resolves variable references through nested scopes
//! - Validates operand types of every arithmetic operation
//! - Validates the expression type of every declaration against its property
//!
//! Problems are attached to the offending nodes; nothing is returned. Use
//! `Stylesheet::has_errors` and `Stylesheet::collect_errors` afterwards.

pub mod type_checker;
