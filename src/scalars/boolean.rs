//! `Boolean`: truthiness of anything.

use crate::{ast::Literal, error::CoercionError, value::Value};

pub const DESCRIPTION: &str = "The `Boolean` scalar type represents `true` or `false`.";

/// Never fails; see [`Value::is_truthy`].
pub fn coerce(value: &Value) -> bool {
    value.is_truthy()
}

pub fn serialize(value: &Value) -> Result<Value, CoercionError> {
    Ok(Value::Boolean(coerce(value)))
}

pub fn parse_value(value: &Value) -> Result<Value, CoercionError> {
    Ok(Value::Boolean(coerce(value)))
}

/// `Boolean` nodes only.
pub fn parse_literal(node: &Literal) -> Option<bool> {
    match node {
        Literal::Boolean(b) => Some(*b),
        _ => None,
    }
}

pub fn parse_literal_value(node: &Literal) -> Option<Value> {
    parse_literal(node).map(Value::Boolean)
}
