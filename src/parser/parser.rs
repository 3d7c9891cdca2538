//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Statements are dispatched through a lookup table keyed on the leading
//! token; expressions are parsed by the layered expression/term/factor
//! functions in `expr.rs`, with factors dispatched through a second table.
//!
//! The parser keeps one token of lookahead and stops at the first syntax
//! error. No partial tree is returned.

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::statements::Program,
    config::LanguageConfig,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{create_token_lookups, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// Deepest allowed nesting of blocks, groupings and unary minus.
pub const MAX_NESTING: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Open blocks, groupings and unary minus operators
    depth: usize,
    /// Name of the unit being parsed, used when no token carries a position
    file: Rc<String>,
    /// Capabilities of the language dialect
    config: &'a LanguageConfig,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for factor (prefix) expression handlers
    nud_lookup: NUDLookup,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser instance with empty lookup tables.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `file` - Optional name of the unit, defaults to `shell`
    /// * `config` - Language configuration shared with the lexer
    pub fn new(tokens: Vec<Token>, file: Option<String>, config: &'a LanguageConfig) -> Self {
        Parser {
            tokens,
            pos: 0,
            depth: 0,
            file: Rc::new(file.unwrap_or_else(|| String::from("shell"))),
            config,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
        }
    }

    pub fn config(&self) -> &LanguageConfig {
        self.config
    }

    /// Returns the current token without advancing, `None` at end of input.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token, `TokenKind::EOF` at end of input.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token()
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// Advances to the next token and returns the one consumed.
    pub fn advance(&mut self) -> Result<Token, Error> {
        match self.tokens.get(self.pos) {
            Some(token) => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
            None => Err(self.end_of_input()),
        }
    }

    /// Expects a token of the specified kind, with a custom explanation on failure.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `UnexpectedTokenDetailed` or `UnexpectedEndOfInput` error.
    pub fn expect_error(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.unexpected_detailed(message));
        }

        self.advance()
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.unexpected());
        }

        self.advance()
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Error for the current token, or for the end of input when there is none.
    pub fn unexpected(&self) -> Error {
        match self.current_token() {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                },
                token.position.clone(),
            ),
            None => self.end_of_input(),
        }
    }

    pub fn unexpected_detailed(&self, message: &str) -> Error {
        match self.current_token() {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.value.clone(),
                    message: String::from(message),
                },
                token.position.clone(),
            ),
            None => self.end_of_input(),
        }
    }

    /// Opens one nesting level, failing once `MAX_NESTING` is exceeded.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep { limit: MAX_NESTING },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn end_of_input(&self) -> Error {
        Error::new(ErrorImpl::UnexpectedEndOfInput, self.get_position())
    }

    /// Position of the current token, falling back to the last one consumed.
    pub fn get_position(&self) -> Position {
        self.current_token()
            .or_else(|| self.tokens.last())
            .map(|token| token.position.clone())
            .unwrap_or_else(|| Position(1, Rc::clone(&self.file)))
    }

    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_nud_handler(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    /// Registers a factor handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses a stream of tokens into a [`Program`].
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses statements until the tokens
/// run out. The first syntax error abandons the whole unit.
pub fn parse(
    tokens: Vec<Token>,
    file: Option<String>,
    config: &LanguageConfig,
) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, file, config);
    create_token_lookups(&mut parser);

    let mut statements = vec![];

    while parser.has_tokens() {
        statements.push(parse_stmt(&mut parser)?);
    }

    Ok(Program { statements })
}
