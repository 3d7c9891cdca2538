//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a [`Program`](crate::ast::statements::Program). It handles:
//!
//! - Statement parsing (declarations, assignments, control flow, `break`)
//! - Expression parsing with precedence encoded in the grammar layers
//! - Single relational conditions for `if`, `while` and `for` headers
//!
//! ```text
//! statement  := declaration | assignment | if | switch | while | for | break
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := Identifier | Number | Char | String | '(' expression ')' | '-' factor
//! condition  := expression relop expression
//! ```

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
