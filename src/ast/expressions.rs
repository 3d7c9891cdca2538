use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{}", value),
            // Plain decimal with a fractional part, never exponent form
            Number::Float(value) => {
                let text = value.to_string();
                if text.contains('.') {
                    write!(f, "{}", text)
                } else {
                    write!(f, "{}.0", text)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn from_token(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Dash => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl RelOp {
    pub fn from_token(kind: TokenKind) -> Option<RelOp> {
        match kind {
            TokenKind::Equals => Some(RelOp::Equal),
            TokenKind::NotEquals => Some(RelOp::NotEqual),
            TokenKind::Less => Some(RelOp::Less),
            TokenKind::LessEquals => Some(RelOp::LessEqual),
            TokenKind::Greater => Some(RelOp::Greater),
            TokenKind::GreaterEquals => Some(RelOp::GreaterEqual),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            RelOp::Equal => "==",
            RelOp::NotEqual => "!=",
            RelOp::Less => "<",
            RelOp::LessEqual => "<=",
            RelOp::Greater => ">",
            RelOp::GreaterEqual => ">=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    UnaryMinus(Box<Expr>),
    Identifier(String),
    Number(Number),
    Char(char),
    String(String),
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn identifier(name: &str) -> Expr {
        Expr::Identifier(String::from(name))
    }

    pub fn int(value: i64) -> Expr {
        Expr::Number(Number::Int(value))
    }
}

/// Writes the expression with every operator node wrapped in parentheses,
/// so `1+2*3` renders as `(1+(2*3))`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Binary { op, left, right } => {
                write!(f, "({}{}{})", left, op.symbol(), right)
            }
            Expr::UnaryMinus(operand) => write!(f, "(-{})", operand),
            Expr::Identifier(name) => write!(f, "{}", name),
            Expr::Number(number) => write!(f, "{}", number),
            Expr::Char(ch) => write!(f, "{:?}", ch),
            Expr::String(text) => write!(f, "{:?}", text),
        }
    }
}

/// A single relational comparison, as found in `if`, `while` and `for` headers.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub op: RelOp,
    pub left: Expr,
    pub right: Expr,
}

impl Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.left, self.op.symbol(), self.right)
    }
}
