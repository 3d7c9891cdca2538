//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Declarations and assignments
//! - Expressions and precedence
//! - Control flow statements
//! - Syntax errors

use crate::{
    ast::{
        expressions::{BinaryOp, Condition, Expr, Number, RelOp},
        statements::{AssignOp, Assignment, CaseLabel, Program, Stmt, TypeName},
    },
    config::LanguageConfig,
    errors::errors::{Error, ErrorImpl, ErrorKind},
    lexer::lexer::tokenize,
};

use super::parser::{parse, MAX_NESTING};

fn parse_source_with(source: &str, config: &LanguageConfig) -> Result<Program, Error> {
    let (tokens, errors) = tokenize(source.to_string(), Some("test.c".to_string()), config);
    assert!(errors.is_empty(), "unexpected lexical errors: {:?}", errors);
    parse(tokens, Some("test.c".to_string()), config)
}

fn parse_source(source: &str) -> Result<Program, Error> {
    parse_source_with(source, &LanguageConfig::default())
}

fn single_stmt(source: &str) -> Stmt {
    let mut program = parse_source(source).unwrap();
    assert_eq!(program.statements.len(), 1);
    program.statements.remove(0)
}

fn assigned_expr(source: &str) -> Expr {
    match single_stmt(source) {
        Stmt::Assignment(assignment) => assignment.value,
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_declaration() {
    let Stmt::Declaration(decl) = single_stmt("int x = 42;") else {
        panic!("expected declaration");
    };

    assert_eq!(decl.ty, TypeName::Int);
    assert_eq!(decl.declarators.len(), 1);
    assert_eq!(decl.declarators[0].name, "x");
    assert_eq!(decl.declarators[0].initializer, Some(Expr::int(42)));
}

#[test]
fn test_parse_multiple_declarators() {
    let Stmt::Declaration(decl) = single_stmt("float a = 1.5, b, c = a * 2;") else {
        panic!("expected declaration");
    };

    assert_eq!(decl.ty, TypeName::Float);
    let names: Vec<&str> = decl.declarators.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(
        decl.declarators[0].initializer,
        Some(Expr::Number(Number::Float(1.5)))
    );
    assert!(decl.declarators[1].initializer.is_none());
    assert_eq!(
        decl.declarators[2].initializer,
        Some(Expr::binary(BinaryOp::Mul, Expr::identifier("a"), Expr::int(2)))
    );
}

#[test]
fn test_parse_char_declaration() {
    let Stmt::Declaration(decl) = single_stmt("char c = 'x';") else {
        panic!("expected declaration");
    };

    assert_eq!(decl.ty, TypeName::Char);
    assert_eq!(decl.declarators[0].initializer, Some(Expr::Char('x')));
}

#[test]
fn test_parse_compound_assignments() {
    let ops: Vec<AssignOp> = ["x = 1;", "x += 1;", "x -= 1;", "x *= 1;", "x /= 1;"]
        .iter()
        .map(|source| match single_stmt(source) {
            Stmt::Assignment(assignment) => assignment.op,
            other => panic!("expected assignment, got {:?}", other),
        })
        .collect();

    assert_eq!(
        ops,
        vec![
            AssignOp::Assign,
            AssignOp::AddAssign,
            AssignOp::SubAssign,
            AssignOp::MulAssign,
            AssignOp::DivAssign,
        ]
    );
}

#[test]
fn test_precedence() {
    assert_eq!(assigned_expr("x = 1 + 2 * 3;").to_string(), "(1+(2*3))");
    assert_eq!(assigned_expr("x = 1 * 2 + 3;").to_string(), "((1*2)+3)");
    assert_eq!(assigned_expr("x = (1 + 2) * 3;").to_string(), "((1+2)*3)");
}

#[test]
fn test_left_associativity() {
    assert_eq!(assigned_expr("x = a - b - c;").to_string(), "((a-b)-c)");
    assert_eq!(assigned_expr("x = a / b * c;").to_string(), "((a/b)*c)");
}

#[test]
fn test_unary_minus() {
    assert_eq!(assigned_expr("x = -a * b;").to_string(), "((-a)*b)");
    assert_eq!(assigned_expr("x = 2 - -3;").to_string(), "(2-(-3))");
    assert_eq!(assigned_expr("x = -(a + 1);").to_string(), "(-(a+1))");
}

#[test]
fn test_unary_minus_disabled() {
    let config = LanguageConfig::default().with_unary_minus(false);
    let error = parse_source_with("x = -1;", &config).unwrap_err();

    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnexpectedToken { token } if token == "-"
    ));
}

#[test]
fn test_parse_if_else() {
    let Stmt::If(if_stmt) = single_stmt("if (x < 10) { y = y + 1; } else { y = 0; }") else {
        panic!("expected if");
    };

    assert_eq!(
        if_stmt.condition,
        Condition {
            op: RelOp::Less,
            left: Expr::identifier("x"),
            right: Expr::int(10),
        }
    );
    assert_eq!(if_stmt.then_block.len(), 1);
    assert_eq!(if_stmt.else_block.map(|block| block.len()), Some(1));
}

#[test]
fn test_parse_if_without_else() {
    let Stmt::If(if_stmt) = single_stmt("if (a >= b) { }") else {
        panic!("expected if");
    };

    assert_eq!(if_stmt.condition.op, RelOp::GreaterEqual);
    assert!(if_stmt.then_block.is_empty());
    assert!(if_stmt.else_block.is_none());
}

#[test]
fn test_parse_nested_blocks() {
    let Stmt::While(while_stmt) =
        single_stmt("while (i != 0) { if (i == 3) { break; } i -= 1; }")
    else {
        panic!("expected while");
    };

    assert_eq!(while_stmt.condition.op, RelOp::NotEqual);
    assert_eq!(while_stmt.body.len(), 2);
    assert!(matches!(while_stmt.body.statements[0], Stmt::If(_)));
    assert!(matches!(while_stmt.body.statements[1], Stmt::Assignment(_)));
}

#[test]
fn test_parse_for() {
    let Stmt::For(for_stmt) = single_stmt("for (i = 0; i < 5; i = i + 1) { break; }") else {
        panic!("expected for");
    };

    assert_eq!(
        for_stmt.init,
        Assignment {
            target: "i".to_string(),
            op: AssignOp::Assign,
            value: Expr::int(0),
        }
    );
    assert_eq!(for_stmt.condition.to_string(), "i<5");
    assert_eq!(for_stmt.step.value.to_string(), "(i+1)");
    assert_eq!(for_stmt.body.statements, vec![Stmt::Break]);
}

#[test]
fn test_parse_switch() {
    let source = "switch (c) { case a: case 2: { x = 1; break; } case 'z': { x = 2; } default: { x = 0; } }";
    let Stmt::Switch(switch) = single_stmt(source) else {
        panic!("expected switch");
    };

    assert_eq!(switch.discriminant, "c");
    assert_eq!(switch.cases.len(), 2);
    assert_eq!(
        switch.cases[0].labels,
        vec![
            CaseLabel::Identifier("a".to_string()),
            CaseLabel::Number(Number::Int(2))
        ]
    );
    assert_eq!(switch.cases[0].body.len(), 2);
    assert_eq!(switch.cases[1].labels, vec![CaseLabel::Char('z')]);
    assert!(switch.default.is_some());
}

#[test]
fn test_parse_empty_switch() {
    let Stmt::Switch(switch) = single_stmt("switch (x) { }") else {
        panic!("expected switch");
    };

    assert!(switch.cases.is_empty());
    assert!(switch.default.is_none());
}

#[test]
fn test_case_after_default_is_rejected() {
    let error =
        parse_source("switch (x) { default: { } case a: { } }").unwrap_err();

    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnexpectedToken { token } if token == "case"
    ));
}

#[test]
fn test_second_default_is_rejected() {
    assert!(parse_source("switch (x) { default: { } default: { } }").is_err());
}

#[test]
fn test_parse_program_with_several_statements() {
    let program = parse_source("int i; i = 0;\nwhile (i < 3) { i += 1; }").unwrap();

    assert_eq!(program.statements.len(), 3);
}

#[test]
fn test_empty_program() {
    let program = parse_source("").unwrap();
    assert!(program.statements.is_empty());
}

#[test]
fn test_missing_identifier_in_declaration() {
    let error = parse_source("int = 5;").unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Syntax);
    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnexpectedTokenDetailed { token, .. } if token == "="
    ));
    assert_eq!(error.get_line(), 1);
}

#[test]
fn test_missing_semicolon_reports_end_of_input() {
    let error = parse_source("x = 1\n+ 2").unwrap_err();

    assert!(matches!(error.get_impl(), ErrorImpl::UnexpectedEndOfInput));
    assert_eq!(error.get_line(), 2);
}

#[test]
fn test_unclosed_block() {
    let error = parse_source("while (x < 1) { x = 1;").unwrap_err();
    assert!(matches!(error.get_impl(), ErrorImpl::UnexpectedEndOfInput));
}

#[test]
fn test_chained_comparison_is_rejected() {
    let error = parse_source("if (a < b < c) { }").unwrap_err();

    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnexpectedToken { token } if token == "<"
    ));
}

#[test]
fn test_condition_requires_relational_operator() {
    let error = parse_source("while (x) { }").unwrap_err();

    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnexpectedTokenDetailed { token, .. } if token == ")"
    ));
}

#[test]
fn test_missing_assignment_operator() {
    let error = parse_source("x 5;").unwrap_err();

    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnexpectedTokenDetailed { token, .. } if token == "5"
    ));
}

#[test]
fn test_first_error_only() {
    let error = parse_source("x = ;\ny = ;").unwrap_err();

    assert_eq!(error.get_line(), 1);
}

#[test]
fn test_error_line_in_later_statement() {
    let error = parse_source("int a = 1;\nint b = 2;\nfloat 2x = 3.0;").unwrap_err();

    assert_eq!(error.get_line(), 3);
}

#[test]
fn test_stray_else_is_rejected() {
    assert!(parse_source("else { x = 1; }").is_err());
}

#[test]
fn test_deep_grouping_is_rejected() {
    let source = format!("x = {}1{};", "(".repeat(5000), ")".repeat(5000));
    let error = parse_source(&source).unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Syntax);
    assert!(matches!(
        error.get_impl(),
        ErrorImpl::NestingTooDeep { limit } if *limit == MAX_NESTING
    ));
}

#[test]
fn test_long_unary_minus_chain_is_rejected() {
    let source = format!("x = {}1;", "-".repeat(200_000));
    let error = parse_source(&source).unwrap_err();

    assert!(matches!(error.get_impl(), ErrorImpl::NestingTooDeep { .. }));
}

#[test]
fn test_deep_blocks_are_rejected() {
    let source = format!(
        "{}break;{}",
        "while (a < b) { ".repeat(1000),
        "}".repeat(1000)
    );
    let error = parse_source(&source).unwrap_err();

    assert!(matches!(error.get_impl(), ErrorImpl::NestingTooDeep { .. }));
}

#[test]
fn test_nesting_within_limit_is_accepted() {
    let depth = MAX_NESTING / 2;
    let grouped = format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(assigned_expr(&grouped), Expr::int(1));

    let blocks = format!("{}x = 1;{}", "if (a < b) { ".repeat(depth), "}".repeat(depth));
    assert!(parse_source(&blocks).is_ok());

    // Levels are released when a group closes
    let siblings = format!("x = {};", vec!["(1)"; MAX_NESTING * 2].join(" + "));
    assert!(parse_source(&siblings).is_ok());
}
