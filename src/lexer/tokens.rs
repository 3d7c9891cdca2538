use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Type);
        map.insert("float", TokenKind::Type);
        map.insert("char", TokenKind::Type);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("switch", TokenKind::Switch);
        map.insert("case", TokenKind::Case);
        map.insert("default", TokenKind::Default);
        map.insert("break", TokenKind::Break);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// Never produced by the lexer, reported by the parser once the cursor runs past the last token.
    EOF,
    Type,
    Identifier,
    Number,
    Char,
    String,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Equals,        // ==
    NotEquals,     // !=
    Less,          // <
    LessEquals,    // <=
    Greater,       // >
    GreaterEquals, // >=

    Assignment,  // =
    PlusEquals,  // +=
    MinusEquals, // -=
    StarEquals,  // *=
    SlashEquals, // /=

    Plus,
    Dash,
    Star,
    Slash,

    Colon,
    Comma,
    Semicolon,

    // Reserved
    If,
    Else,
    Switch,
    Case,
    Default,
    Break,
    While,
    For,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&format!("{:?}", self))
    }
}

/// Resolved value of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Char(char),
    Str(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub literal: Option<Literal>,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{:<14}{:?}", self.kind, literal),
            None => write!(f, "{:<14}{:?}", self.kind, self.value),
        }
    }
}

impl Token {
    pub fn line(&self) -> u32 {
        self.position.0
    }

    pub fn debug(&self) {
        println!("  {}", self);
    }
}
