use tracing::debug;

use crate::{
    ast::{
        ast::{BodyItem, Declaration, Stylerule, Stylesheet},
        expressions::Expression,
    },
    errors::errors::{Error, ErrorImpl},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Spaces before each declaration.
    pub indent: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions { indent: 2 }
    }
}

struct Generator<'a> {
    options: &'a GeneratorOptions,
    blocks: Vec<String>,
}

impl Generator<'_> {
    fn gen_stylerule(&mut self, rule: &Stylerule, parents: &[String]) -> Result<(), Error> {
        let selectors = combine_selectors(parents, rule);

        let declarations = rule
            .body
            .iter()
            .filter_map(|item| match item {
                BodyItem::Declaration(declaration) => Some(self.gen_declaration(declaration)),
                _ => None,
            })
            .collect::<Result<Vec<String>, Error>>()?;

        if !declarations.is_empty() {
            self.blocks.push(format!(
                "{} {{\n{}}}",
                selectors.join(", "),
                declarations.concat()
            ));
        }

        for item in &rule.body {
            if let BodyItem::Stylerule(nested) = item {
                self.gen_stylerule(nested, &selectors)?;
            }
        }

        Ok(())
    }

    fn gen_declaration(&self, declaration: &Declaration) -> Result<String, Error> {
        let Expression::Literal(literal) = &declaration.expression else {
            return Err(Error::new(
                ErrorImpl::UnevaluatedExpression,
                declaration.expression.get_span().start.clone(),
            ));
        };

        Ok(format!(
            "{:indent$}{}: {};\n",
            "",
            declaration.property,
            literal.value,
            indent = self.options.indent
        ))
    }
}

/// Every parent selector followed by every selector of `rule`.
fn combine_selectors(parents: &[String], rule: &Stylerule) -> Vec<String> {
    let own: Vec<String> = rule.selectors.iter().map(|selector| selector.to_string()).collect();

    if parents.is_empty() {
        return own;
    }

    parents
        .iter()
        .flat_map(|parent| own.iter().map(move |selector| format!("{} {}", parent, selector)))
        .collect()
}

/// Renders an evaluated stylesheet as CSS.
#[tracing::instrument(level = "debug", skip_all)]
pub fn generate(ast: &Stylesheet, options: &GeneratorOptions) -> Result<String, Error> {
    let mut generator = Generator {
        options,
        blocks: vec![],
    };

    for item in &ast.body {
        if let BodyItem::Stylerule(rule) = item {
            generator.gen_stylerule(rule, &[])?;
        }
    }

    debug!(rules = generator.blocks.len(), "generated css");

    if generator.blocks.is_empty() {
        return Ok(String::new());
    }

    Ok(format!("{}\n", generator.blocks.join("\n\n")))
}
