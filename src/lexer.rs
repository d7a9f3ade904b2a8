use std::fmt;

use crate::ast::Token;

/// Line and column in the source, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors raised while splitting source text into tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// Character that cannot start any token
    UnexpectedCharacter { ch: char, position: Position },

    /// String or block string without its closing quote
    UnterminatedString(Position),

    /// Unknown or malformed escape inside a string
    InvalidEscape { sequence: String, position: Position },

    /// Number that does not follow IntValue / FloatValue shape
    InvalidNumber { message: String, position: Position },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter { ch, position } => {
                write!(f, "Unexpected character {:?} at {}", ch, position)
            }
            LexError::UnterminatedString(position) => {
                write!(f, "Unterminated string starting at {}", position)
            }
            LexError::InvalidEscape { sequence, position } => {
                write!(f, "Invalid character escape sequence: {} at {}", sequence, position)
            }
            LexError::InvalidNumber { message, position } => {
                write!(f, "Invalid number, {} at {}", message, position)
            }
        }
    }
}

impl std::error::Error for LexError {}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    /// Start of the most recently returned token
    token_start: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            token_start: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Line and column of a char index.
    fn position_at(&self, index: usize) -> Position {
        let mut line = 1;
        let mut column = 1;
        let mut chars = self.input[..index.min(self.input.len())].iter().peekable();
        while let Some(&ch) = chars.next() {
            match ch {
                '\n' => {
                    line += 1;
                    column = 1;
                }
                '\r' => {
                    if chars.peek() != Some(&&'\n') {
                        line += 1;
                        column = 1;
                    }
                }
                _ => column += 1,
            }
        }
        Position { line, column }
    }

    /// Current position in the source
    pub fn position(&self) -> Position {
        self.position_at(self.position)
    }

    /// Where the most recently returned token starts
    pub fn token_position(&self) -> Position {
        self.position_at(self.token_start)
    }

    fn starts_with(&self, pattern: &str) -> bool {
        pattern
            .chars()
            .enumerate()
            .all(|(i, c)| self.peek_char(i) == Some(c))
    }

    /// Skips whitespace, line terminators, commas, BOM and comments.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.current_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => self.advance(),
                '#' => {
                    while let Some(c) = self.current_char() {
                        if c == '\n' || c == '\r' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn read_name(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn invalid_number(&self, expected: &str) -> LexError {
        let got = match self.current_char() {
            Some(ch) => format!("{:?}", ch),
            None => "<EOF>".to_string(),
        };
        LexError::InvalidNumber {
            message: format!("{} but got {}", expected, got),
            position: self.position(),
        }
    }

    fn read_digits(&mut self, number: &mut String) -> Result<(), LexError> {
        if !self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            return Err(self.invalid_number("expected digit"));
        }
        while let Some(ch) = self.current_char().filter(char::is_ascii_digit) {
            number.push(ch);
            self.advance();
        }
        Ok(())
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let mut number = String::new();
        let mut is_float = false;

        if self.current_char() == Some('-') {
            number.push('-');
            self.advance();
        }

        if self.current_char() == Some('0') {
            number.push('0');
            self.advance();
            if self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                return Err(self.invalid_number("unexpected digit after 0"));
            }
        } else {
            self.read_digits(&mut number)?;
        }

        if self.current_char() == Some('.') {
            is_float = true;
            number.push('.');
            self.advance();
            self.read_digits(&mut number)?;
        }

        if let Some(e @ ('e' | 'E')) = self.current_char() {
            is_float = true;
            number.push(e);
            self.advance();
            if let Some(sign @ ('+' | '-')) = self.current_char() {
                number.push(sign);
                self.advance();
            }
            self.read_digits(&mut number)?;
        }

        // A number may not run straight into a name or another fraction
        if self
            .current_char()
            .is_some_and(|c| c == '.' || c == '_' || c.is_ascii_alphabetic())
        {
            return Err(self.invalid_number("expected digit"));
        }

        Ok(if is_float {
            Token::Float(number)
        } else {
            Token::Int(number)
        })
    }

    fn read_unicode_escape(&mut self, escape_start: usize) -> Result<u32, LexError> {
        let mut code = 0u32;
        for _ in 0..4 {
            match self.current_char().and_then(|c| c.to_digit(16)) {
                Some(d) => {
                    code = code * 16 + d;
                    self.advance();
                }
                None => {
                    let sequence: String = self.input[escape_start..self.position.min(self.input.len())]
                        .iter()
                        .collect();
                    return Err(LexError::InvalidEscape {
                        sequence,
                        position: self.position_at(escape_start),
                    });
                }
            }
        }
        Ok(code)
    }

    fn read_string(&mut self) -> Result<String, LexError> {
        let start = self.position;
        let mut result = String::new();
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                '"' => {
                    self.advance();
                    return Ok(result);
                }
                '\n' | '\r' => break,
                c if is_disallowed_control(c) => {
                    return Err(LexError::UnexpectedCharacter {
                        ch: c,
                        position: self.position(),
                    });
                }
                '\\' => {
                    let escape_start = self.position;
                    self.advance(); // Consume backslash
                    let escaped = match self.current_char() {
                        Some('"') => '"',
                        Some('\\') => '\\',
                        Some('/') => '/',
                        Some('b') => '\u{0008}',
                        Some('f') => '\u{000C}',
                        Some('n') => '\n',
                        Some('r') => '\r',
                        Some('t') => '\t',
                        Some('u') => {
                            self.advance();
                            let code = self.read_unicode_escape(escape_start)?;
                            let code = if (0xD800..0xDC00).contains(&code) && self.starts_with("\\u") {
                                // Surrogate pair
                                self.advance();
                                self.advance();
                                let low = self.read_unicode_escape(escape_start)?;
                                if (0xDC00..0xE000).contains(&low) {
                                    0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00)
                                } else {
                                    code
                                }
                            } else {
                                code
                            };
                            let decoded = char::from_u32(code).ok_or_else(|| LexError::InvalidEscape {
                                sequence: self.input[escape_start..self.position].iter().collect(),
                                position: self.position_at(escape_start),
                            })?;
                            result.push(decoded);
                            continue;
                        }
                        Some(other) => {
                            return Err(LexError::InvalidEscape {
                                sequence: format!("\\{}", other),
                                position: self.position_at(escape_start),
                            });
                        }
                        None => break,
                    };
                    result.push(escaped);
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedString(self.position_at(start)))
    }

    fn read_block_string(&mut self) -> Result<String, LexError> {
        let start = self.position;
        let mut raw = String::new();
        self.position += 3;

        while self.current_char().is_some() {
            if self.starts_with("\"\"\"") {
                self.position += 3;
                return Ok(dedent_block_string(&raw));
            }
            if self.starts_with("\\\"\"\"") {
                raw.push_str("\"\"\"");
                self.position += 4;
                continue;
            }
            if let Some(ch) = self.current_char() {
                if is_disallowed_control(ch) && ch != '\n' && ch != '\r' {
                    return Err(LexError::UnexpectedCharacter {
                        ch,
                        position: self.position(),
                    });
                }
                raw.push(ch);
            }
            self.advance();
        }

        Err(LexError::UnterminatedString(self.position_at(start)))
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_ignored();
        self.token_start = self.position;

        let token = match self.current_char() {
            None => Token::Eof,
            Some('$') => {
                self.advance();
                Token::Dollar
            }
            Some(':') => {
                self.advance();
                Token::Colon
            }
            Some('[') => {
                self.advance();
                Token::LBracket
            }
            Some(']') => {
                self.advance();
                Token::RBracket
            }
            Some('{') => {
                self.advance();
                Token::LBrace
            }
            Some('}') => {
                self.advance();
                Token::RBrace
            }
            Some('"') if self.starts_with("\"\"\"") => Token::BlockString(self.read_block_string()?),
            Some('"') => Token::String(self.read_string()?),
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => Token::Name(self.read_name()),
            Some(ch) if ch.is_ascii_digit() || ch == '-' => self.read_number()?,
            Some(ch) => {
                return Err(LexError::UnexpectedCharacter {
                    ch,
                    position: self.position(),
                });
            }
        };

        Ok(token)
    }
}

/// C0 controls other than tab may not appear raw inside a string.
fn is_disallowed_control(c: char) -> bool {
    c < '\u{0020}' && c != '\t'
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

fn is_blank(line: &str) -> bool {
    leading_whitespace(line) == line.chars().count()
}

/// Removes the common indentation of a block string and trims blank first
/// and last lines.
pub fn dedent_block_string(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !is_blank(line))
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0);

    let mut dedented: Vec<String> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line.to_string()
            } else {
                line.chars().skip(common_indent).collect()
            }
        })
        .collect();

    while dedented.first().is_some_and(|l| is_blank(l)) {
        dedented.remove(0);
    }
    while dedented.last().is_some_and(|l| is_blank(l)) {
        dedented.pop();
    }

    dedented.join("\n")
}

#[test]
fn test_ignored_tokens() {
    let mut lexer = Lexer::new("\u{FEFF} [1, 2,,3] # trailing comment\n");
    assert_eq!(lexer.next_token(), Ok(Token::LBracket));
    assert_eq!(lexer.next_token(), Ok(Token::Int("1".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::Int("2".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::Int("3".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::RBracket));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

#[test]
fn test_position_tracks_lines() {
    let mut lexer = Lexer::new("{\n  a: @\n}");
    assert_eq!(lexer.next_token(), Ok(Token::LBrace));
    assert_eq!(lexer.next_token(), Ok(Token::Name("a".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::Colon));
    assert_eq!(
        lexer.next_token(),
        Err(LexError::UnexpectedCharacter {
            ch: '@',
            position: Position { line: 2, column: 6 }
        })
    );
}
