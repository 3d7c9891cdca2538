//! Integration tests for end-to-end analysis.
//!
//! These tests drive the public API from source text through tokenization
//! and parsing, and check the trees and diagnostics that come out.

use c_analyzer::{
    analyze,
    ast::{
        expressions::{BinaryOp, Condition, Expr, RelOp},
        statements::{AssignOp, Assignment, Block, IfStmt, Stmt},
    },
    config::LanguageConfig,
    errors::errors::{ErrorImpl, ErrorKind},
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
};

fn assign(target: &str, value: Expr) -> Stmt {
    Stmt::Assignment(Assignment {
        target: target.to_string(),
        op: AssignOp::Assign,
        value,
    })
}

#[test]
fn test_declaration_token_sequence() {
    let (tokens, errors) = tokenize("int x = 10;".to_string(), None, &LanguageConfig::default());

    assert!(errors.is_empty());
    let kinds: Vec<(TokenKind, &str, u32)> = tokens
        .iter()
        .map(|token| (token.kind, token.value.as_str(), token.line()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (TokenKind::Type, "int", 1),
            (TokenKind::Identifier, "x", 1),
            (TokenKind::Assignment, "=", 1),
            (TokenKind::Number, "10", 1),
            (TokenKind::Semicolon, ";", 1),
        ]
    );
}

#[test]
fn test_three_declarators_in_order() {
    let analysis = analyze("int x1 = 1 + 2, x2, x3 = x1 * 3;", None, &LanguageConfig::default());
    let program = analysis.program.unwrap();

    let Stmt::Declaration(decl) = &program.statements[0] else {
        panic!("expected declaration");
    };
    assert_eq!(decl.declarators.len(), 3);
    assert_eq!(decl.declarators[0].name, "x1");
    assert_eq!(decl.declarators[1].name, "x2");
    assert!(decl.declarators[1].initializer.is_none());
    assert_eq!(decl.declarators[2].name, "x3");
}

#[test]
fn test_if_else_tree() {
    let analysis = analyze("if(x<10){y=y+1;}else{y=0;}", None, &LanguageConfig::default());

    let expected = Stmt::If(IfStmt {
        condition: Condition {
            op: RelOp::Less,
            left: Expr::identifier("x"),
            right: Expr::int(10),
        },
        then_block: Block {
            statements: vec![assign(
                "y",
                Expr::binary(BinaryOp::Add, Expr::identifier("y"), Expr::int(1)),
            )],
        },
        else_block: Some(Block {
            statements: vec![assign("y", Expr::int(0))],
        }),
    });

    assert!(analysis.diagnostics.is_empty());
    assert_eq!(analysis.program.unwrap().statements, vec![expected]);
}

#[test]
fn test_for_with_break_body() {
    let analysis = analyze("for(i=0;i<5;i=i+1){break;}", None, &LanguageConfig::default());
    let program = analysis.program.unwrap();

    let Stmt::For(for_stmt) = &program.statements[0] else {
        panic!("expected for");
    };
    assert_eq!(for_stmt.body.statements, vec![Stmt::Break]);
}

#[test]
fn test_missing_identifier_reports_equals() {
    let analysis = analyze("int = 5;", None, &LanguageConfig::default());

    assert!(analysis.program.is_none());
    assert_eq!(analysis.diagnostics.len(), 1);
    let error = &analysis.diagnostics[0];
    assert_eq!(error.get_kind(), ErrorKind::Syntax);
    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnexpectedTokenDetailed { token, .. } if token == "="
    ));
}

#[test]
fn test_comment_only_line() {
    let (tokens, errors) = tokenize("// ignore me".to_string(), None, &LanguageConfig::default());

    assert!(tokens.is_empty());
    assert!(errors.is_empty());
    assert!(analyze("// ignore me", None, &LanguageConfig::default()).is_ok());
}

#[test]
fn test_unterminated_string_resumes_scanning() {
    let (tokens, errors) = tokenize(
        "int a;\nx = \"abc;\ny = 2;".to_string(),
        None,
        &LanguageConfig::default(),
    );

    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0].get_impl(), ErrorImpl::UnterminatedString));
    assert_eq!(errors[0].get_line(), 2);
    assert!(tokens.iter().any(|token| token.value == "abc"));
    assert_eq!(tokens.last().unwrap().line(), 3);
}

#[test]
fn test_multiline_program_with_comments() {
    let source = r#"
        /* counters
           and limits */
        int i = 0, total;
        float ratio = 2.5e1;
        char c = '\n';
        while (i < 10) {
            // accumulate
            total += i * 2;
            i = i + 1;
        }
        switch (c) {
            case a:
            case b: { total = 0; break; }
            default: { total -= 1; }
        }
    "#;
    let analysis = analyze(source, Some("sample.c".to_string()), &LanguageConfig::default());

    assert!(analysis.diagnostics.is_empty(), "{:?}", analysis.diagnostics);
    let program = analysis.program.unwrap();
    assert_eq!(program.statements.len(), 5);
    assert!(matches!(program.statements[3], Stmt::While(_)));
    assert!(matches!(program.statements[4], Stmt::Switch(_)));
}

#[test]
fn test_rendered_program_parses_back_to_same_tree() {
    let source = "int a = -b * (c + 1), d;\n\
                  if (a >= 2) { d = 'q'; } else { d /= 2; }\n\
                  for (a = 0; a != 3; a += 1) { while (d < 1.5) { break; } }\n\
                  switch (a) { case x: case 1: { a = 2; } default: { } }";
    let config = LanguageConfig::default();

    let original = analyze(source, None, &config).program.unwrap();
    let rendered = original.to_string();
    let reparsed = analyze(&rendered, None, &config).program.unwrap();

    assert_eq!(original, reparsed);
}

#[test]
fn test_end_of_input_error() {
    let analysis = analyze("if (x < 1) {", None, &LanguageConfig::default());

    assert!(analysis.program.is_none());
    assert!(matches!(
        analysis.diagnostics[0].get_impl(),
        ErrorImpl::UnexpectedEndOfInput
    ));
}

#[test]
fn test_parse_is_repeatable_on_fresh_units() {
    let config = LanguageConfig::default();

    let (bad, _) = tokenize("x = ;".to_string(), None, &config);
    assert!(parse(bad, None, &config).is_err());

    let (good, _) = tokenize("x = 1;".to_string(), None, &config);
    assert!(parse(good, None, &config).is_ok());
}

#[test]
fn test_dialect_without_optional_capabilities() {
    let config = LanguageConfig::default()
        .with_exponent_literals(false)
        .with_unary_minus(false);

    assert!(analyze("x = 1e3;", None, &config).program.is_none());
    assert!(analyze("x = -1;", None, &config).program.is_none());
    assert!(analyze("x = 1.5 - 1;", None, &config).program.is_some());
}

#[test]
fn test_deeply_nested_input_is_reported_not_fatal() {
    let config = LanguageConfig::default();
    let source = format!("x = {}1{};", "(".repeat(5000), ")".repeat(5000));
    let analysis = analyze(&source, None, &config);

    assert!(analysis.program.is_none());
    assert!(matches!(
        analysis.diagnostics[0].get_impl(),
        ErrorImpl::NestingTooDeep { .. }
    ));

    // The next unit parses normally
    assert!(analyze("x = (1);", None, &config).is_ok());
}

#[test]
fn test_large_float_renders_without_exponent() {
    let config = LanguageConfig::default().with_exponent_literals(false);

    let original = analyze("x = 100000000000000000000.0;", None, &config)
        .program
        .unwrap();
    let rendered = original.to_string();
    assert_eq!(rendered, "x=100000000000000000000.0;");

    let reparsed = analyze(&rendered, None, &config).program.unwrap();
    assert_eq!(original, reparsed);
}
