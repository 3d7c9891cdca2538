use std::{collections::VecDeque, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    config::LanguageConfig,
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Literal, Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

const NUMBER: &str = "^[0-9]+(\\.[0-9]+)?";
const NUMBER_WITH_EXPONENT: &str = "^[0-9]+(\\.[0-9]+)?([eE][+-]?[0-9]+)?";

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = create_patterns(NUMBER_WITH_EXPONENT);
    static ref PATTERNS_NO_EXPONENT: Vec<RegexPattern> = create_patterns(NUMBER);
}

// Order matters: comments before `/`, two-character operators before their prefixes.
fn create_patterns(number: &str) -> Vec<RegexPattern> {
    vec![
        pattern("^[ \\t\\r\\n]+", skip_handler),
        pattern("^//[^\\n]*", skip_handler),
        pattern("^(?s:/\\*.*?\\*/)", skip_handler),
        pattern("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern(number, number_handler),
        pattern("^'(\\\\.|[^\\\\'\\n])'", char_handler),
        pattern("^\"(\\\\.|[^\"\\\\\\n])*\"", string_handler),
        pattern("^\"", unterminated_string_handler),
        pattern("^'", malformed_char_handler),
        pattern("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals)),
        pattern("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals)),
        pattern("^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals)),
        pattern("^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals)),
        pattern("^\\+=", MK_DEFAULT_HANDLER!(TokenKind::PlusEquals)),
        pattern("^-=", MK_DEFAULT_HANDLER!(TokenKind::MinusEquals)),
        pattern("^\\*=", MK_DEFAULT_HANDLER!(TokenKind::StarEquals)),
        pattern("^/=", MK_DEFAULT_HANDLER!(TokenKind::SlashEquals)),
        pattern("^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment)),
        pattern("^<", MK_DEFAULT_HANDLER!(TokenKind::Less)),
        pattern("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater)),
        pattern("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        pattern("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash)),
        pattern("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star)),
        pattern("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash)),
        pattern("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly)),
        pattern("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly)),
        pattern("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen)),
        pattern("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen)),
        pattern("^:", MK_DEFAULT_HANDLER!(TokenKind::Colon)),
        pattern("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        pattern("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon)),
    ]
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).unwrap(),
        handler,
    }
}

/// Single-pass scanner over one input unit.
///
/// The lexer is an iterator: every step yields either a token or a lexical
/// diagnostic, and scanning always continues past bad input until the end of
/// the source. Each `Lexer` owns its cursor, so scans are independent.
pub struct Lexer<'a> {
    patterns: &'static [RegexPattern],
    queue: VecDeque<Result<Token, Error>>,
    source: String,
    pos: usize,
    line: u32,
    file: Rc<String>,
    config: &'a LanguageConfig,
}

impl<'a> Lexer<'a> {
    pub fn new(source: String, file: Option<String>, config: &'a LanguageConfig) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let patterns: &'static [RegexPattern] = if config.exponent_literals {
            PATTERNS.as_slice()
        } else {
            PATTERNS_NO_EXPONENT.as_slice()
        };

        Lexer {
            patterns,
            queue: VecDeque::new(),
            source,
            pos: 0,
            line: 1,
            file: file_name,
            config,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, item: Result<Token, Error>) {
        self.queue.push_back(item);
    }

    pub fn get_position(&self) -> Position {
        Position(self.line, Rc::clone(&self.file))
    }

    pub fn error(&mut self, error_impl: ErrorImpl) {
        let position = self.get_position();
        self.push(Err(Error::new(error_impl, position)));
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn count_lines(&mut self, text: &str) {
        self.line += text.matches('\n').count() as u32;
    }

    fn step(&mut self) {
        let patterns = self.patterns;

        for pattern in patterns.iter() {
            if let Some(found) = pattern.regex.find(self.remainder()) {
                let matched = found.as_str().to_string();
                (pattern.handler)(self, &matched);
                return;
            }
        }

        if let Some(character) = self.remainder().chars().next() {
            self.error(ErrorImpl::UnrecognisedCharacter { character });
            self.advance_n(character.len_utf8());
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.queue.is_empty() && !self.at_eof() {
            self.step();
        }

        self.queue.pop_front()
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.count_lines(matched);
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let kind = lexer
        .config
        .lookup_reserved(matched)
        .unwrap_or(TokenKind::Identifier);

    let position = lexer.get_position();
    lexer.push(Ok(MK_TOKEN!(kind, String::from(matched), None, position)));
    lexer.advance_n(matched.len());
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    let is_float = matched.contains(['.', 'e', 'E']);

    let literal = if is_float {
        matched
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Literal::Float)
    } else {
        matched.parse::<i64>().map(Literal::Int).ok()
    };

    let literal = match literal {
        Some(literal) => literal,
        None => {
            lexer.error(ErrorImpl::NumberParseError {
                token: String::from(matched),
            });
            if is_float {
                Literal::Float(0.0)
            } else {
                Literal::Int(0)
            }
        }
    };

    let position = lexer.get_position();
    lexer.push(Ok(MK_TOKEN!(
        TokenKind::Number,
        String::from(matched),
        Some(literal),
        position
    )));
    lexer.advance_n(matched.len());
}

fn char_handler(lexer: &mut Lexer, matched: &str) {
    let content = unescape(&matched[1..matched.len() - 1]);
    let mut chars = content.chars();

    match (chars.next(), chars.next()) {
        (Some(ch), None) => {
            let position = lexer.get_position();
            lexer.push(Ok(MK_TOKEN!(
                TokenKind::Char,
                content.clone(),
                Some(Literal::Char(ch)),
                position
            )));
        }
        _ => lexer.error(ErrorImpl::MalformedChar),
    }

    lexer.advance_n(matched.len());
}

fn string_handler(lexer: &mut Lexer, matched: &str) {
    let content = unescape(&matched[1..matched.len() - 1]);

    let position = lexer.get_position();
    lexer.push(Ok(MK_TOKEN!(
        TokenKind::String,
        content.clone(),
        Some(Literal::Str(content)),
        position
    )));
    lexer.advance_n(matched.len());
}

fn unterminated_string_handler(lexer: &mut Lexer, matched: &str) {
    lexer.error(ErrorImpl::UnterminatedString);
    lexer.advance_n(matched.len());
}

fn malformed_char_handler(lexer: &mut Lexer, matched: &str) {
    lexer.error(ErrorImpl::MalformedChar);
    lexer.advance_n(matched.len());
}

fn unescape(raw: &str) -> String {
    let mut result = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('0') => result.push('\0'),
            Some('\\') => result.push('\\'),
            Some('\'') => result.push('\''),
            Some('"') => result.push('"'),
            Some(other) => {
                // Unknown escape, keep the backslash
                result.push(ch);
                result.push(*other);
            }
            None => {
                result.push(ch);
                continue;
            }
        }
        chars.next();
    }

    result
}

/// Scans a whole unit, separating tokens from lexical diagnostics.
pub fn tokenize(
    source: String,
    file: Option<String>,
    config: &LanguageConfig,
) -> (Vec<Token>, Vec<Error>) {
    let mut tokens = vec![];
    let mut errors = vec![];

    for item in Lexer::new(source, file, config) {
        match item {
            Ok(token) => tokens.push(token),
            Err(error) => errors.push(error),
        }
    }

    (tokens, errors)
}
