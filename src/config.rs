//! Language configuration shared by the lexer and the parser.
//!
//! A [`LanguageConfig`] is built once and borrowed by every [`Lexer`](crate::lexer::lexer::Lexer)
//! and [`Parser`](crate::parser::parser::Parser) created from it. It owns the reserved-word
//! table and the optional capabilities that differ between dialects of the language:
//!
//! - exponent suffixes on numeric literals (`1e-3`)
//! - prefix unary minus in expressions (`-x`)

use std::collections::HashMap;

use crate::lexer::tokens::{TokenKind, RESERVED_LOOKUP};

#[derive(Debug, Clone)]
pub struct LanguageConfig {
    reserved: HashMap<&'static str, TokenKind>,
    pub exponent_literals: bool,
    pub unary_minus: bool,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        LanguageConfig {
            reserved: RESERVED_LOOKUP.clone(),
            exponent_literals: true,
            unary_minus: true,
        }
    }
}

impl LanguageConfig {
    pub fn with_exponent_literals(self, enabled: bool) -> Self {
        LanguageConfig {
            exponent_literals: enabled,
            ..self
        }
    }

    pub fn with_unary_minus(self, enabled: bool) -> Self {
        LanguageConfig {
            unary_minus: enabled,
            ..self
        }
    }

    /// Returns the token kind of a reserved word, or `None` for a plain identifier.
    pub fn lookup_reserved(&self, word: &str) -> Option<TokenKind> {
        self.reserved.get(word).copied()
    }
}
