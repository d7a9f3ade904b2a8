/// Lexical token of the GraphQL value-literal grammar.
///
/// Numbers and strings keep their text; the lexer validates their shape but
/// leaves interpretation to whichever scalar reads the resulting node.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Integer in source form
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -10
    /// 0
    /// ```
    Int(String),

    /// Number with a fraction and/or exponent, in source form
    ///
    /// # Examples
    /// ```text
    /// 3.14
    /// -1e10
    /// 6.0221413e23
    /// ```
    Float(String),

    /// Quoted string, escapes already resolved
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// "tab\there"
    /// "é"
    /// ```
    String(String),

    /// Triple-quoted string, common indentation already removed
    ///
    /// # Example
    /// ```text
    /// """
    ///   multi
    ///   line
    /// """
    /// ```
    BlockString(String),

    /// Name: letter or underscore, followed by letters, digits, or underscores.
    ///
    /// `true`, `false` and `null` are names at this level; the parser gives
    /// them meaning.
    Name(String),

    // Punctuators
    /// Variable prefix (`$`)
    Dollar,

    /// Object field separator (`:`)
    Colon,

    /// `[`
    LBracket,

    /// `]`
    RBracket,

    /// `{`
    LBrace,

    /// `}`
    RBrace,

    /// End of input
    Eof,
}

impl Token {
    /// Short description used in parse errors.
    pub fn describe(&self) -> String {
        match self {
            Token::Int(text) => format!("Int \"{}\"", text),
            Token::Float(text) => format!("Float \"{}\"", text),
            Token::String(text) | Token::BlockString(text) => format!("String \"{}\"", text),
            Token::Name(name) => format!("Name \"{}\"", name),
            Token::Dollar => "\"$\"".to_string(),
            Token::Colon => "\":\"".to_string(),
            Token::LBracket => "\"[\"".to_string(),
            Token::RBracket => "\"]\"".to_string(),
            Token::LBrace => "\"{\"".to_string(),
            Token::RBrace => "\"}\"".to_string(),
            Token::Eof => "<EOF>".to_string(),
        }
    }
}
