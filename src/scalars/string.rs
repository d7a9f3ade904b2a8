//! `String`: UTF-8 text.

use crate::{ast::Literal, error::CoercionError, value::Value};

pub const DESCRIPTION: &str = "The `String` scalar type represents textual data, represented as UTF-8 character sequences. The String type is most often used by GraphQL to represent free-form human-readable text.";

/// Stringifies any non-list value.
///
/// Lists are rejected rather than joined with commas.
///
/// # Examples
///
/// ```
/// use gql_scalars::{scalars::string, Value};
///
/// assert_eq!(string::coerce(&Value::Integer(42)), Ok("42".to_string()));
/// assert_eq!(
///     string::coerce(&Value::from(vec![1, 2])).unwrap_err().to_string(),
///     "String cannot represent an array value: [1,2]"
/// );
/// ```
pub fn coerce(value: &Value) -> Result<String, CoercionError> {
    if let Value::Array(_) = value {
        return Err(CoercionError::ArrayValue(value.to_string()));
    }
    Ok(value.to_string())
}

pub fn serialize(value: &Value) -> Result<Value, CoercionError> {
    coerce(value).map(Value::String)
}

pub fn parse_value(value: &Value) -> Result<Value, CoercionError> {
    coerce(value).map(Value::String)
}

/// Returns the text of a `String` node verbatim. `None` for other kinds.
pub fn parse_literal(node: &Literal) -> Option<String> {
    match node {
        Literal::String { value, .. } => Some(value.clone()),
        _ => None,
    }
}

pub fn parse_literal_value(node: &Literal) -> Option<Value> {
    parse_literal(node).map(Value::String)
}
