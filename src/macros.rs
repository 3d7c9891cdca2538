//! Utility macros for the analyzer.
//!
//! This module defines helper macros used by the lexer's pattern table:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for simple tokens

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$literal` - The resolved literal, if any
/// * `$position` - The source position
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), Some(Literal::Int(42)), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $literal:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            literal: $literal,
            position: $position,
        }
    };
}

/// Creates a default lexer handler for fixed-text tokens such as operators
/// and punctuation.
///
/// The generated handler pushes a token of the given kind at the lexer's
/// current position and advances past the matched text.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+=").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::PlusEquals),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {{
        fn handler(lexer: &mut Lexer, matched: &str) {
            let position = lexer.get_position();
            lexer.push(Ok(MK_TOKEN!($kind, String::from(matched), None, position)));
            lexer.advance_n(matched.len());
        }
        handler
    }};
}
