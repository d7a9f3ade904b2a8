use std::{fmt, mem};

use crate::{
    ast::{Literal, ObjectField, Token},
    lexer::{LexError, Lexer, Position},
};

/// Deepest list/object nesting accepted before parsing gives up.
pub const MAX_DEPTH: usize = 256;

/// Errors raised while building a [`Literal`] from source text.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Tokenization failed
    Lex(LexError),

    /// A token that cannot appear here
    UnexpectedToken {
        expected: String,
        found: String,
        position: Position,
    },

    /// `$name` where only constant values are allowed
    UnexpectedVariable { name: String, position: Position },

    /// Lists and objects nested deeper than [`MAX_DEPTH`]
    TooDeep { position: Position },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(e) => write!(f, "Syntax error: {}", e),
            ParseError::UnexpectedToken {
                expected,
                found,
                position,
            } => write!(f, "Syntax error: Expected {}, found {} at {}", expected, found, position),
            ParseError::UnexpectedVariable { name, position } => {
                write!(f, "Syntax error: Unexpected variable \"${}\" in constant value at {}", name, position)
            }
            ParseError::TooDeep { position } => {
                write!(f, "Syntax error: Value nested deeper than {} levels at {}", MAX_DEPTH, position)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Lex(e)
    }
}

/// Recursive-descent parser for GraphQL value literals.
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    /// Where `current_token` starts
    token_position: Position,
    /// Open lists and objects around the current token
    depth: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let (current_token, token_position) = Self::read_token(&mut lexer)?;
        Ok(Parser {
            lexer,
            current_token,
            token_position,
            depth: 0,
        })
    }

    fn read_token(lexer: &mut Lexer) -> Result<(Token, Position), ParseError> {
        let token = lexer.next_token()?;
        Ok((token, lexer.token_position()))
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        let (token, position) = Self::read_token(&mut self.lexer)?;
        self.current_token = token;
        self.token_position = position;
        Ok(())
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: self.current_token.describe(),
            position: self.token_position,
        }
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if mem::discriminant(&self.current_token) != mem::discriminant(&expected) {
            return Err(self.unexpected(&expected.describe()));
        }
        self.advance()
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current_token) == mem::discriminant(token)
    }

    /// Parses one value; variables are allowed.
    pub fn parse_value(&mut self) -> Result<Literal, ParseError> {
        self.parse_value_literal(false)
    }

    /// Parses one value that must not contain variables.
    pub fn parse_const_value(&mut self) -> Result<Literal, ParseError> {
        self.parse_value_literal(true)
    }

    /// Fails unless every token has been consumed.
    pub fn expect_eof(&self) -> Result<(), ParseError> {
        if self.check(&Token::Eof) {
            Ok(())
        } else {
            Err(self.unexpected("<EOF>"))
        }
    }

    fn parse_value_literal(&mut self, is_const: bool) -> Result<Literal, ParseError> {
        let position = self.token_position;
        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Int(text) => {
                self.advance()?;
                Ok(Literal::Int(text))
            }
            Token::Float(text) => {
                self.advance()?;
                Ok(Literal::Float(text))
            }
            Token::String(value) => {
                self.advance()?;
                Ok(Literal::String { value, block: false })
            }
            Token::BlockString(value) => {
                self.advance()?;
                Ok(Literal::String { value, block: true })
            }
            Token::Name(name) => {
                self.advance()?;
                Ok(match name.as_str() {
                    "true" => Literal::Boolean(true),
                    "false" => Literal::Boolean(false),
                    "null" => Literal::Null,
                    _ => Literal::Enum(name),
                })
            }
            Token::Dollar => {
                self.advance()?;
                let name = match mem::replace(&mut self.current_token, Token::Eof) {
                    Token::Name(name) => name,
                    other => {
                        self.current_token = other;
                        return Err(self.unexpected("Name"));
                    }
                };
                if is_const {
                    return Err(ParseError::UnexpectedVariable { name, position });
                }
                self.advance()?;
                Ok(Literal::Variable(name))
            }
            Token::LBracket => {
                self.enter(position)?;
                self.advance()?;
                let mut items = Vec::new();
                while !self.check(&Token::RBracket) {
                    if self.check(&Token::Eof) {
                        return Err(self.unexpected("\"]\""));
                    }
                    items.push(self.parse_value_literal(is_const)?);
                }
                self.expect(Token::RBracket)?;
                self.depth -= 1;
                Ok(Literal::List(items))
            }
            Token::LBrace => {
                self.enter(position)?;
                self.advance()?;
                let mut fields = Vec::new();
                while !self.check(&Token::RBrace) {
                    fields.push(self.parse_object_field(is_const)?);
                }
                self.expect(Token::RBrace)?;
                self.depth -= 1;
                Ok(Literal::Object(fields))
            }
            other => {
                self.current_token = other;
                Err(self.unexpected("a value"))
            }
        }
    }

    fn enter(&mut self, position: Position) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep { position });
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_object_field(&mut self, is_const: bool) -> Result<ObjectField, ParseError> {
        let name = match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Name(name) => name,
            other => {
                self.current_token = other;
                return Err(self.unexpected("Name"));
            }
        };
        self.advance()?;
        self.expect(Token::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ObjectField { name, value })
    }
}

/// Parses source text holding exactly one value literal.
///
/// # Examples
///
/// ```
/// use gql_scalars::{ast::Literal, parse_literal};
///
/// assert_eq!(parse_literal("007").unwrap(), Literal::Int("007".to_string()));
/// assert_eq!(parse_literal("[true]").unwrap(), Literal::List(vec![Literal::Boolean(true)]));
/// assert!(parse_literal("1 2").is_err());
/// ```
pub fn parse_literal(source: &str) -> Result<Literal, ParseError> {
    let mut parser = Parser::new(Lexer::new(source))?;
    let value = parser.parse_value()?;
    parser.expect_eof()?;
    Ok(value)
}
