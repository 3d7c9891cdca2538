use crate::{
    ast::{
        expressions::{Condition, Number},
        statements::{
            AssignOp, Assignment, Block, CaseBlock, CaseLabel, Declarator, ForStmt, IfStmt, Stmt,
            SwitchStmt, TypeName, VarDeclStmt, WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Literal, TokenKind},
    parser::expr::{parse_condition, parse_expr},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.get_stmt_handler(parser.current_token_kind()) {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected()),
    }
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let type_token = parser.advance()?;
    let ty = match TypeName::from_name(&type_token.value) {
        Some(ty) => ty,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: type_token.value,
                    message: String::from("unknown type name"),
                },
                type_token.position,
            ))
        }
    };

    let mut declarators = vec![parse_declarator(parser)?];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance()?;
        declarators.push(parse_declarator(parser)?);
    }

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Declaration(VarDeclStmt { ty, declarators }))
}

fn parse_declarator(parser: &mut Parser) -> Result<Declarator, Error> {
    let name = parser
        .expect_error(TokenKind::Identifier, "expected identifier in declaration")?
        .value;

    let initializer = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance()?;
        Some(parse_expr(parser)?)
    } else {
        None
    };

    Ok(Declarator { name, initializer })
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let assignment = parse_assignment(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Assignment(assignment))
}

/// Assignment without its terminating `;`, shared with `for` headers.
pub fn parse_assignment(parser: &mut Parser) -> Result<Assignment, Error> {
    let target = parser
        .expect_error(TokenKind::Identifier, "expected assignment target")?
        .value;

    let op = match AssignOp::from_token(parser.current_token_kind()) {
        Some(op) => op,
        None => return Err(parser.unexpected_detailed("expected assignment operator")),
    };
    parser.advance()?;

    let value = parse_expr(parser)?;

    Ok(Assignment { target, op, value })
}

pub fn parse_block(parser: &mut Parser) -> Result<Block, Error> {
    parser.expect(TokenKind::OpenCurly)?;
    parser.enter_nesting()?;

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;
    parser.exit_nesting();

    Ok(Block { statements })
}

fn parse_header_condition(parser: &mut Parser) -> Result<Condition, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_condition(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(condition)
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;

    let condition = parse_header_condition(parser)?;
    let then_block = parse_block(parser)?;

    let else_block = if parser.current_token_kind() == TokenKind::Else {
        parser.advance()?;
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_block,
        else_block,
    }))
}

pub fn parse_switch_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;

    parser.expect(TokenKind::OpenParen)?;
    let discriminant = parser
        .expect_error(TokenKind::Identifier, "expected identifier to switch on")?
        .value;
    parser.expect(TokenKind::CloseParen)?;

    parser.expect(TokenKind::OpenCurly)?;

    let mut cases = Vec::new();
    while parser.current_token_kind() == TokenKind::Case {
        cases.push(parse_case_block(parser)?);
    }

    let default = if parser.current_token_kind() == TokenKind::Default {
        parser.advance()?;
        parser.expect(TokenKind::Colon)?;
        Some(parse_block(parser)?)
    } else {
        None
    };

    // A `case` or second `default` after the default block fails here
    parser.expect(TokenKind::CloseCurly)?;

    Ok(Stmt::Switch(SwitchStmt {
        discriminant,
        cases,
        default,
    }))
}

fn parse_case_block(parser: &mut Parser) -> Result<CaseBlock, Error> {
    let mut labels = Vec::new();

    while parser.current_token_kind() == TokenKind::Case {
        parser.advance()?;
        labels.push(parse_case_label(parser)?);
        parser.expect(TokenKind::Colon)?;
    }

    let body = parse_block(parser)?;

    Ok(CaseBlock { labels, body })
}

fn parse_case_label(parser: &mut Parser) -> Result<CaseLabel, Error> {
    let label = match parser.current_token() {
        Some(token) => match (token.kind, &token.literal) {
            (TokenKind::Identifier, _) => Some(CaseLabel::Identifier(token.value.clone())),
            (TokenKind::Number, Some(Literal::Int(value))) => {
                Some(CaseLabel::Number(Number::Int(*value)))
            }
            (TokenKind::Number, Some(Literal::Float(value))) => {
                Some(CaseLabel::Number(Number::Float(*value)))
            }
            (TokenKind::Char, Some(Literal::Char(ch))) => Some(CaseLabel::Char(*ch)),
            _ => None,
        },
        None => None,
    };

    match label {
        Some(label) => {
            parser.advance()?;
            Ok(label)
        }
        None => Err(parser.unexpected_detailed("expected case label")),
    }
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;

    let condition = parse_header_condition(parser)?;
    let body = parse_block(parser)?;

    Ok(Stmt::While(WhileStmt { condition, body }))
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;

    parser.expect(TokenKind::OpenParen)?;
    let init = parse_assignment(parser)?;
    parser.expect(TokenKind::Semicolon)?;
    let condition = parse_condition(parser)?;
    parser.expect(TokenKind::Semicolon)?;
    let step = parse_assignment(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    Ok(Stmt::For(ForStmt {
        init,
        condition,
        step,
        body,
    }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance()?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Break)
}
