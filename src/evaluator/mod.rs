//! Expression evaluation module.
//!
//! Folds every expression of a checked stylesheet down to a single literal:
//! variable references are replaced by the value bound in the nearest
//! enclosing scope, and operations are computed with whole number
//! arithmetic. The input tree is left untouched; a folded copy is returned.
//!
//! Only run this on a tree the type checker accepted.

pub mod evaluator;
