use crate::{
    ast::expressions::{BinaryOp, Condition, Expr, Number, RelOp},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Literal, TokenKind},
};

use super::parser::Parser;

/// `expression := term (('+' | '-') term)*`
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_term(parser)?;

    loop {
        let op = match BinaryOp::from_token(parser.current_token_kind()) {
            Some(op @ (BinaryOp::Add | BinaryOp::Sub)) => op,
            _ => break,
        };

        parser.advance()?;
        let right = parse_term(parser)?;
        left = Expr::binary(op, left, right);
    }

    Ok(left)
}

/// `term := factor (('*' | '/') factor)*`
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_factor(parser)?;

    loop {
        let op = match BinaryOp::from_token(parser.current_token_kind()) {
            Some(op @ (BinaryOp::Mul | BinaryOp::Div)) => op,
            _ => break,
        };

        parser.advance()?;
        let right = parse_factor(parser)?;
        left = Expr::binary(op, left, right);
    }

    Ok(left)
}

pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.get_nud_handler(parser.current_token_kind()) {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected()),
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance()?;

    match (token.kind, token.literal) {
        (TokenKind::Identifier, _) => Ok(Expr::Identifier(token.value)),
        (TokenKind::Number, Some(Literal::Int(value))) => Ok(Expr::Number(Number::Int(value))),
        (TokenKind::Number, Some(Literal::Float(value))) => {
            Ok(Expr::Number(Number::Float(value)))
        }
        (TokenKind::Char, Some(Literal::Char(ch))) => Ok(Expr::Char(ch)),
        (TokenKind::String, Some(Literal::Str(text))) => Ok(Expr::String(text)),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken { token: token.value },
            token.position,
        )),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    parser.advance()?;
    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parser.exit_nesting();

    Ok(expr)
}

/// Binds tighter than every binary operator: `-a*b` is `((-a)*b)`.
pub fn parse_unary_minus_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    parser.advance()?;
    let operand = parse_factor(parser)?;
    parser.exit_nesting();

    Ok(Expr::UnaryMinus(Box::new(operand)))
}

/// `condition := expression relop expression`, exactly one comparison.
pub fn parse_condition(parser: &mut Parser) -> Result<Condition, Error> {
    let left = parse_expr(parser)?;

    let op = match RelOp::from_token(parser.current_token_kind()) {
        Some(op) => op,
        None => return Err(parser.unexpected_detailed("expected relational operator")),
    };
    parser.advance()?;

    let right = parse_expr(parser)?;

    Ok(Condition { op, left, right })
}
