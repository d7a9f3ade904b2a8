pub mod ast;
pub mod cli;
pub mod error;
pub mod lexer;
pub mod number;
pub mod output;
pub mod parser;
pub mod registry;
pub mod scalars;
pub mod value;

pub use ast::{Kind, Literal, Token};
pub use error::CoercionError;
pub use lexer::{LexError, Lexer, Position};
pub use output::serialize_object;
pub use parser::{ParseError, Parser, parse_literal};
pub use registry::{
    ScalarType, is_specified_scalar_name, is_specified_scalar_type, lookup_scalar,
    specified_scalar_types,
};
pub use value::{CustomValue, Value, ValueObject};
