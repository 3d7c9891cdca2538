use std::{fmt::Display, slice::Iter};

use crate::lexer::tokens::TokenKind;

use super::expressions::{Condition, Expr, Number};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName {
    Int,
    Float,
    Char,
}

impl TypeName {
    pub fn from_name(name: &str) -> Option<TypeName> {
        match name {
            "int" => Some(TypeName::Int),
            "float" => Some(TypeName::Float),
            "char" => Some(TypeName::Char),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TypeName::Int => "int",
            TypeName::Float => "float",
            TypeName::Char => "char",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
}

impl AssignOp {
    pub fn from_token(kind: TokenKind) -> Option<AssignOp> {
        match kind {
            TokenKind::Assignment => Some(AssignOp::Assign),
            TokenKind::PlusEquals => Some(AssignOp::AddAssign),
            TokenKind::MinusEquals => Some(AssignOp::SubAssign),
            TokenKind::StarEquals => Some(AssignOp::MulAssign),
            TokenKind::SlashEquals => Some(AssignOp::DivAssign),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubAssign => "-=",
            AssignOp::MulAssign => "*=",
            AssignOp::DivAssign => "/=",
        }
    }
}

/// `target op value`, without the terminating `;` so `for` headers can reuse it.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: String,
    pub op: AssignOp,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declarator {
    pub name: String,
    pub initializer: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub ty: TypeName,
    /// Never empty.
    pub declarators: Vec<Declarator>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Condition,
    pub then_block: Block,
    pub else_block: Option<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CaseLabel {
    Identifier(String),
    Number(Number),
    Char(char),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseBlock {
    /// Never empty; every label shares the body.
    pub labels: Vec<CaseLabel>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStmt {
    pub discriminant: String,
    pub cases: Vec<CaseBlock>,
    pub default: Option<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Condition,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Assignment,
    pub condition: Condition,
    pub step: Assignment,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declaration(VarDeclStmt),
    Assignment(Assignment),
    If(IfStmt),
    Switch(SwitchStmt),
    While(WhileStmt),
    For(ForStmt),
    Break,
}

/// Root of one parsed input unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }
}

// Display renders compact source that parses back to the same tree.

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.target, self.op.symbol(), self.value)
    }
}

impl Display for Declarator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.initializer {
            Some(initializer) => write!(f, "{}={}", self.name, initializer),
            None => write!(f, "{}", self.name),
        }
    }
}

impl Display for CaseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseLabel::Identifier(name) => write!(f, "{}", name),
            CaseLabel::Number(number) => write!(f, "{}", number),
            CaseLabel::Char(ch) => write!(f, "{:?}", ch),
        }
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body: Vec<String> = self.iter().map(|stmt| stmt.to_string()).collect();
        write!(f, "{{{}}}", body.join(" "))
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Declaration(decl) => {
                let declarators: Vec<String> =
                    decl.declarators.iter().map(|d| d.to_string()).collect();
                write!(f, "{} {};", decl.ty.name(), declarators.join(","))
            }
            Stmt::Assignment(assignment) => write!(f, "{};", assignment),
            Stmt::If(stmt) => {
                write!(f, "if({}){}", stmt.condition, stmt.then_block)?;
                if let Some(else_block) = &stmt.else_block {
                    write!(f, "else{}", else_block)?;
                }
                Ok(())
            }
            Stmt::Switch(stmt) => {
                write!(f, "switch({}){{", stmt.discriminant)?;
                for case in &stmt.cases {
                    for label in &case.labels {
                        write!(f, "case {}:", label)?;
                    }
                    write!(f, "{}", case.body)?;
                }
                if let Some(default) = &stmt.default {
                    write!(f, "default:{}", default)?;
                }
                write!(f, "}}")
            }
            Stmt::While(stmt) => write!(f, "while({}){}", stmt.condition, stmt.body),
            Stmt::For(stmt) => write!(
                f,
                "for({};{};{}){}",
                stmt.init, stmt.condition, stmt.step, stmt.body
            ),
            Stmt::Break => write!(f, "break;"),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self.iter().map(|stmt| stmt.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
