//! Integration tests for end-to-end compilation.
//!
//! These tests drive the public API from stylesheet source through
//! tokenization, parsing, type checking, evaluation and CSS generation.

use icss::{
    ast::{ast::BodyItem, ast::Stylesheet},
    compile, display_error,
    evaluator::evaluator::evaluate,
    generator::generator::GeneratorOptions,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};
use pretty_assertions::assert_eq;
use std::rc::Rc;

fn check(source: &str) -> Stylesheet {
    let tokens = tokenize(source.to_string(), Some("test.icss".to_string())).unwrap();
    let mut ast = parse(tokens, Rc::new("test.icss".to_string())).unwrap();
    type_check(&mut ast);
    ast
}

fn compile_source(source: &str) -> Result<String, Vec<String>> {
    compile(
        source.to_string(),
        Some("test.icss".to_string()),
        &GeneratorOptions::default(),
    )
    .map_err(|errors| errors.iter().map(|error| error.get_message()).collect())
}

#[test]
fn test_compile_full_stylesheet() {
    let source = r#"
        /* theme */
        @link-color: #ff0000;
        @base: 10px;
        @wide: 80%;

        p {
            background-color: white;
            width: @base * 50;
        }

        a, .link {
            color: @link-color;
        }

        #menu {
            @base: 20px;
            width: @wide - 5%;
            height: @base + 2 * @base;

            .item {
                height: @base * 2 - 4px;
            }
        }

        .footer {
            height: @base;
        }
    "#;

    let css = compile_source(source).unwrap();

    assert_eq!(
        css,
        "p {
  background-color: white;
  width: 500px;
}

a, .link {
  color: #ff0000;
}

#menu {
  width: 75%;
  height: 60px;
}

#menu .item {
  height: 36px;
}

.footer {
  height: 10px;
}
"
    );
}

#[test]
fn test_scenario_a() {
    assert_eq!(
        compile_source("@x: 10px; .a { width: @x + 5px; }").unwrap(),
        ".a {\n  width: 15px;\n}\n"
    );
}

#[test]
fn test_scenario_b() {
    assert_eq!(
        compile_source("@x: 10px; @y: 20%; .a { width: @x + @y; }").unwrap_err(),
        vec!["The types have to be equal to each other when adding or subtracting.".to_string()]
    );
}

#[test]
fn test_scenario_c() {
    assert_eq!(
        compile_source(".a { color: red * 2; }").unwrap_err(),
        vec!["An equation cannot contain a color.".to_string()]
    );
}

#[test]
fn test_scenario_d() {
    assert_eq!(
        compile_source("@s: 3; .a { height: 4px * @s; }").unwrap(),
        ".a {\n  height: 12px;\n}\n"
    );
}

#[test]
fn test_scenario_e() {
    assert_eq!(
        compile_source(".a { width: @undefined; }").unwrap_err(),
        vec![
            "Variable '@undefined' not defined!".to_string(),
            "An expression with the type of 'UNDEFINED' is not allowed on the width property."
                .to_string(),
        ]
    );
}

#[test]
fn test_all_errors_are_reported() {
    let errors = compile_source(
        "@c: #000000;
         .a { width: @c + 1px; }
         .b { height: 10%; }
         .c { color: @nothing; }",
    )
    .unwrap_err();

    assert_eq!(
        errors,
        vec![
            "An equation cannot contain a color.".to_string(),
            "An expression with the type of 'COLOR' is not allowed on the width property."
                .to_string(),
            "An expression with the type of 'PERCENTAGE' is not allowed on the height property."
                .to_string(),
            "Variable '@nothing' not defined!".to_string(),
            "An expression with the type of 'UNDEFINED' is not allowed on the color property."
                .to_string(),
        ]
    );
}

#[test]
fn test_syntax_error_stops_pipeline() {
    let errors = compile(
        ".a { width: 1px ".to_string(),
        None,
        &GeneratorOptions::default(),
    )
    .unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnexpectedToken");
}

#[test]
fn test_checked_then_evaluated_tree_has_only_literals() {
    let ast = check("@a: 2px; .a { @b: @a * 3; width: @b - @a; p { height: (@b + @a) * 2; } }");
    assert!(!ast.has_errors());

    let evaluated = evaluate(&ast).unwrap();

    fn only_literals(body: &[BodyItem]) -> bool {
        body.iter().all(|item| match item {
            BodyItem::Stylerule(rule) => only_literals(&rule.body),
            BodyItem::Declaration(declaration) => declaration.expression.as_literal().is_some(),
            BodyItem::VariableAssignment(assignment) => {
                assignment.expression.as_literal().is_some()
            }
        })
    }

    assert!(only_literals(&evaluated.body));
    assert_eq!(evaluate(&evaluated).unwrap(), evaluated);
}

#[test]
fn test_display_checker_error() {
    let source = "@x: 10px;\n.a {\n  width: @x + 5%;\n}\n";
    let ast = check(source);
    let errors = ast.collect_errors();

    assert_eq!(errors.len(), 1);
    assert_eq!(
        display_error(errors[0], source),
        "Error: OperandTypeMismatch (The types have to be equal to each other when adding or subtracting.)
-> test.icss
  |
3 | width: @x + 5%;
  | -------^
"
    );
}
