#![allow(clippy::module_inception)]

use std::rc::Rc;

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorTip},
    evaluator::evaluator::evaluate,
    generator::generator::{generate, GeneratorOptions},
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

pub mod ast;
pub mod errors;
pub mod evaluator;
pub mod generator;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod scope;
pub mod type_checker;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Finds the line containing a byte offset.
///
/// Returns the 1-based line number, the text of that line and the column of
/// the offset inside it, or `None` when the offset lies past the source.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}

/// Renders an error against the source it was raised on.
pub fn display_error(error: &Error, source: &str) -> String {
    /*
        Error: message
        -> style.icss
           |
        20 | .a { width: @x + 5%; }
           | ------------^
    */

    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}

/// Runs the whole pipeline: tokenize, parse, check, evaluate and generate.
///
/// Checking never stops at the first problem, so on failure every error the
/// checker attached to the tree is returned.
pub fn compile(
    source: String,
    file: Option<String>,
    options: &GeneratorOptions,
) -> Result<String, Vec<Error>> {
    let file_name = Rc::new(file.clone().unwrap_or_else(|| String::from("stdin")));

    let tokens = tokenize(source, file).map_err(|error| vec![error])?;
    let mut ast = parse(tokens, file_name).map_err(|error| vec![error])?;

    type_check(&mut ast);

    if ast.has_errors() {
        let errors: Vec<Error> = ast.collect_errors().into_iter().cloned().collect();
        debug!(count = errors.len(), "checking rejected the stylesheet");
        return Err(errors);
    }

    let evaluated = evaluate(&ast).map_err(|error| vec![error])?;
    generate(&evaluated, options).map_err(|error| vec![error])
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "@x: 10px;\n\n.a {\n  width: @x;\n}\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 4).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "@x: 10px;\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 25).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "  width: @x;\n");
        assert_eq!(line_pos, 9);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(super::get_line_at_position("a {}", 10).is_none());
    }

    #[test]
    fn test_display_error_points_at_offset() {
        let source = ".a { width: @y; }\n";
        let error = Error::new(
            ErrorImpl::VariableNotDefined {
                variable: String::from("@y"),
            },
            Position(12, Rc::new(String::from("style.icss"))),
        );

        let rendered = super::display_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: VariableNotDefined (Variable '@y' not defined!)");
        assert_eq!(lines[1], "-> style.icss");
        assert_eq!(lines[3], "1 | .a { width: @y; }");
        assert_eq!(lines[4], "  | ------------^");
    }
}
