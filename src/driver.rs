//! Line buffering for interactive input.
//!
//! A [`LineBuffer`] collects prompt lines until the braces they open are
//! closed again, then hands back the whole fragment as one unit for the
//! analyzer. Braces inside comments and char/string literals do not count.
//! Comments are left in the text: the lexer discards them itself.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Code,
    BlockComment,
}

#[derive(Debug)]
pub struct LineBuffer {
    lines: Vec<String>,
    depth: i32,
    state: ScanState,
}

impl Default for LineBuffer {
    fn default() -> Self {
        LineBuffer::new()
    }
}

impl LineBuffer {
    pub fn new() -> Self {
        LineBuffer {
            lines: vec![],
            depth: 0,
            state: ScanState::Code,
        }
    }

    /// Adds a line and returns the buffered unit once it is complete.
    ///
    /// A unit is complete when every `{` has been matched and no block
    /// comment is left open. A surplus `}` also completes the unit so the
    /// parser can report it.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        self.scan(line);
        self.lines.push(String::from(line));

        if self.depth <= 0 && self.state == ScanState::Code {
            let unit = self.lines.join("\n");
            self.reset();
            return Some(unit);
        }

        None
    }

    pub fn is_pending(&self) -> bool {
        !self.lines.is_empty()
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn reset(&mut self) {
        self.lines.clear();
        self.depth = 0;
        self.state = ScanState::Code;
    }

    fn scan(&mut self, line: &str) {
        let mut chars = line.chars().peekable();

        while let Some(ch) = chars.next() {
            if self.state == ScanState::BlockComment {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    self.state = ScanState::Code;
                }
                continue;
            }

            match ch {
                '/' if chars.peek() == Some(&'/') => return,
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    self.state = ScanState::BlockComment;
                }
                '"' | '\'' => {
                    // Literals never span lines, an unterminated one ends here
                    while let Some(inner) = chars.next() {
                        if inner == '\\' {
                            chars.next();
                        } else if inner == ch {
                            break;
                        }
                    }
                }
                '{' => self.depth += 1,
                '}' => self.depth -= 1,
                _ => {}
            }
        }
    }
}
