use std::fmt;

/// Kind tag of a [`Literal`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Variable,
    Int,
    Float,
    String,
    Boolean,
    Null,
    Enum,
    List,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Variable => "Variable",
            Kind::Int => "IntValue",
            Kind::Float => "FloatValue",
            Kind::String => "StringValue",
            Kind::Boolean => "BooleanValue",
            Kind::Null => "NullValue",
            Kind::Enum => "EnumValue",
            Kind::List => "ListValue",
            Kind::Object => "ObjectValue",
        };
        write!(f, "{}", name)
    }
}

/// A value literal as written in query text.
///
/// # Examples
///
/// ```
/// use gql_scalars::ast::{Kind, Literal};
///
/// let node = Literal::Int("007".to_string());
/// assert_eq!(node.kind(), Kind::Int);
/// assert_eq!(node.value(), Some("007"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Variable reference (`$name`), holding the name without `$`
    Variable(String),

    /// Integer, raw digits including sign
    Int(String),

    /// Float, raw text including sign, fraction and exponent
    Float(String),

    /// String contents with escapes resolved
    String {
        value: String,
        /// Written as a `"""` block string
        block: bool,
    },

    /// `true` / `false`
    Boolean(bool),

    /// `null`
    Null,

    /// Bare name other than `true`, `false` or `null`
    Enum(String),

    /// `[a, b, ...]`
    List(Vec<Literal>),

    /// `{name: value, ...}`, fields in source order
    Object(Vec<ObjectField>),
}

/// One `name: value` entry of an object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectField {
    pub name: String,
    pub value: Literal,
}

impl Literal {
    /// Shorthand for a plain quoted string node.
    pub fn string(value: impl Into<String>) -> Self {
        Literal::String {
            value: value.into(),
            block: false,
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Literal::Variable(_) => Kind::Variable,
            Literal::Int(_) => Kind::Int,
            Literal::Float(_) => Kind::Float,
            Literal::String { .. } => Kind::String,
            Literal::Boolean(_) => Kind::Boolean,
            Literal::Null => Kind::Null,
            Literal::Enum(_) => Kind::Enum,
            Literal::List(_) => Kind::List,
            Literal::Object(_) => Kind::Object,
        }
    }

    /// Raw text of a leaf node; `None` for booleans, null and composites.
    pub fn value(&self) -> Option<&str> {
        match self {
            Literal::Variable(text)
            | Literal::Int(text)
            | Literal::Float(text)
            | Literal::Enum(text)
            | Literal::String { value: text, .. } => Some(text),
            Literal::Boolean(_) | Literal::Null | Literal::List(_) | Literal::Object(_) => None,
        }
    }

    /// True when the node contains no variable references.
    pub fn is_const(&self) -> bool {
        match self {
            Literal::Variable(_) => false,
            Literal::List(items) => items.iter().all(Literal::is_const),
            Literal::Object(fields) => fields.iter().all(|f| f.value.is_const()),
            _ => true,
        }
    }
}
