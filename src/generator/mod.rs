//! CSS generation module.
//!
//! Renders an evaluated stylesheet as plain CSS:
//!
//! - Variable assignments produce no output
//! - Nested rules are flattened, each nested selector prefixed by its parents
//! - Every declaration must already be a literal

pub mod generator;
