//! The traversal shared by the checking and evaluating passes.
//!
//! Both passes visit the same items in the same order and open and close
//! scopes on the same rule boundaries; only what happens at declarations
//! and assignments differs. A pass implements `ScopedPass` and hands itself
//! to `walk_stylesheet`.

use crate::ast::ast::{BodyItem, Declaration, Stylerule, Stylesheet, VariableAssignment};

use super::scope::ScopeStack;

pub trait ScopedPass {
    /// What a variable name is bound to in this pass.
    type Binding;
    /// Failure type of the pass.
    type Error;

    fn scopes(&mut self) -> &mut ScopeStack<Self::Binding>;

    fn visit_variable_assignment(
        &mut self,
        assignment: &mut VariableAssignment,
    ) -> Result<(), Self::Error>;

    fn visit_declaration(&mut self, declaration: &mut Declaration) -> Result<(), Self::Error>;
}

pub fn walk_stylesheet<P: ScopedPass>(pass: &mut P, stylesheet: &mut Stylesheet) -> Result<(), P::Error> {
    walk_body(pass, &mut stylesheet.body)
}

pub fn walk_body<P: ScopedPass>(pass: &mut P, body: &mut [BodyItem]) -> Result<(), P::Error> {
    for item in body.iter_mut() {
        match item {
            BodyItem::Stylerule(rule) => walk_stylerule(pass, rule)?,
            BodyItem::Declaration(declaration) => pass.visit_declaration(declaration)?,
            BodyItem::VariableAssignment(assignment) => pass.visit_variable_assignment(assignment)?,
        }
    }

    Ok(())
}

/// Walks a rule's body inside its own scope. The scope is closed again
/// whether or not the body was walked successfully.
pub fn walk_stylerule<P: ScopedPass>(pass: &mut P, rule: &mut Stylerule) -> Result<(), P::Error> {
    if !rule.opens_scope() {
        return walk_body(pass, &mut rule.body);
    }

    pass.scopes().open();
    let result = walk_body(pass, &mut rule.body);
    pass.scopes().close();

    result
}
