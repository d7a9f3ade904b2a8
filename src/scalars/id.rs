//! `ID`: opaque identifiers, always carried as strings.
//!
//! Unlike `String`, any value is stringified, lists included. Literal
//! integers keep their digits as written, so `007` stays `"007"`.

use crate::{ast::Literal, error::CoercionError, value::Value};

pub const DESCRIPTION: &str = "The `ID` scalar type represents a unique identifier, often used to refetch an object or as key for a cache. The ID type appears in a JSON response as a String; however, it is not intended to be human-readable. When expected as an input type, any string (such as `\"4\"`) or integer (such as `4`) input value will be accepted as an ID.";

pub fn coerce(value: &Value) -> String {
    value.to_string()
}

pub fn serialize(value: &Value) -> Result<Value, CoercionError> {
    Ok(Value::String(coerce(value)))
}

pub fn parse_value(value: &Value) -> Result<Value, CoercionError> {
    Ok(Value::String(coerce(value)))
}

/// Raw text of `String` and `Int` nodes, without numeric parsing.
pub fn parse_literal(node: &Literal) -> Option<String> {
    match node {
        Literal::String { value: text, .. } | Literal::Int(text) => Some(text.clone()),
        _ => None,
    }
}

pub fn parse_literal_value(node: &Literal) -> Option<Value> {
    parse_literal(node).map(Value::String)
}
