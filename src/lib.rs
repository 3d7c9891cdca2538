#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::statements::Program,
    config::LanguageConfig,
    errors::errors::{Error, ErrorTip},
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::parse,
};

pub mod ast;
pub mod config;
pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Line number (1-based) and name of the unit it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

/// Everything produced for one input unit.
///
/// `diagnostics` holds every lexical error followed by at most one syntax
/// error. `program` is `None` exactly when the parse failed.
#[derive(Debug)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Error>,
    pub program: Option<Program>,
}

impl Analysis {
    pub fn is_ok(&self) -> bool {
        self.program.is_some()
    }
}

/// Tokenizes and parses one unit. Lexical errors do not prevent parsing,
/// the parser simply never sees the skipped characters.
pub fn analyze(source: &str, file: Option<String>, config: &LanguageConfig) -> Analysis {
    let (tokens, mut diagnostics) = tokenize(source.to_string(), file.clone(), config);

    let program = match parse(tokens.clone(), file, config) {
        Ok(program) => Some(program),
        Err(error) => {
            diagnostics.push(error);
            None
        }
    };

    Analysis {
        tokens,
        diagnostics,
        program,
    }
}

pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source.lines().nth(line as usize - 1)
}


/// Renders a diagnostic with the offending source line.
///
/// ```text
/// Error: UnexpectedTokenDetailed (Unexpected token: `=`, expected identifier in declaration)
/// -> demo.c
///    |
///  2 | int = 5;
///    |
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let line_string = position.0.to_string();
    let padding = line_string.len() + 3;

    let mut lines = vec![];

    if let ErrorTip::None = error.get_tip() {
        lines.push(format!("Error: {} ({})", error.get_error_name(), error.get_impl()));
    } else {
        lines.push(format!("Error: {} ({})", error.get_error_name(), error.get_tip()));
    }
    lines.push(format!("-> {}", position.1));
    lines.push(format!("{:>padding$}", "|"));

    if let Some(line_text) = get_line(source, position.0) {
        lines.push(format!(" {} | {}", line_string, line_text.trim()));
        lines.push(format!("{:>padding$}", "|"));
    }

    lines.join("\n")
}

pub fn display_error(error: &Error, source: &str) {
    println!("{}", format_error(error, source));
}
