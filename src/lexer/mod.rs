//! Lexical analysis module for the analyzer.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization through a priority-ordered table of regex patterns
//! - Recognition of type names, keywords, identifiers, literals, and operators
//! - Line tracking for error reporting, including inside block comments
//! - Fail-soft recovery: bad characters are reported and skipped

pub mod lexer;
pub mod tokens;
