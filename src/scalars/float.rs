//! `Float`: double-precision numbers.
//!
//! Any value with a numeric reading is accepted at full precision. Only
//! NaN and the empty string are rejected.

use crate::{
    ast::Literal,
    error::{CoercionError, EMPTY_STRING},
    number,
    value::Value,
};

pub const DESCRIPTION: &str = "The `Float` scalar type represents signed double-precision fractional values as specified by [IEEE 754](https://en.wikipedia.org/wiki/IEEE_754).";

/// Coerces a runtime value to a double.
///
/// # Examples
///
/// ```
/// use gql_scalars::{scalars::float, Value};
///
/// assert_eq!(float::coerce(&Value::String("3.5".into())), Ok(3.5));
/// assert!(float::coerce(&Value::Float(f64::NAN)).is_err());
/// ```
pub fn coerce(value: &Value) -> Result<f64, CoercionError> {
    if value.is_empty_string() {
        return Err(CoercionError::NonNumeric(EMPTY_STRING.to_string()));
    }

    let num = value.to_number();
    if num.is_nan() {
        return Err(CoercionError::NonNumeric(value.to_string()));
    }
    Ok(num)
}

pub fn serialize(value: &Value) -> Result<Value, CoercionError> {
    coerce(value).map(Value::Float)
}

pub fn parse_value(value: &Value) -> Result<Value, CoercionError> {
    coerce(value).map(Value::Float)
}

/// Reads `Float` and `Int` nodes. `None` for other kinds and for text
/// that is not a decimal number.
pub fn parse_literal(node: &Literal) -> Option<f64> {
    match node {
        Literal::Float(text) | Literal::Int(text) => number::parse_decimal(text),
        _ => None,
    }
}

pub fn parse_literal_value(node: &Literal) -> Option<Value> {
    parse_literal(node).map(Value::Float)
}
