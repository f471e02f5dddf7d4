/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the stylesheet tree
///
/// Submodules:
/// - ast: Stylesheet, rules, declarations, assignments and the node error interface
/// - expressions: Literals, operations and variable references
/// - types: Expression types and the closed set of properties
pub mod ast;
pub mod expressions;
pub mod types;
