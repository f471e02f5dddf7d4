//! Lexical scoping shared by the type checker and the evaluator.
//!
//! - `scope`: the stack of binding frames, generic over what is bound
//! - `walk`: the scoped traversal both passes are instantiated from
//!
//! A frame is opened on entering every stylerule that has at least one
//! selector and closed on leaving it. The bottom frame belongs to the
//! stylesheet itself and lives for the whole pass.

pub mod scope;
pub mod walk;
