//! `Int`: signed 32-bit integers.
//!
//! Output and input share one rule: the value must have a numeric reading
//! that is a whole number within `i32`. The empty string is rejected even
//! though it reads as `0`.
//!
//! Literals follow a looser rule. An `Int` node whose digits fall outside
//! the range is not an error; the literal simply is not an `Int`.

use crate::{
    ast::Literal,
    error::{CoercionError, EMPTY_STRING},
    value::Value,
};

pub const MAX_INT: i32 = i32::MAX;
pub const MIN_INT: i32 = i32::MIN;

pub const DESCRIPTION: &str = "The `Int` scalar type represents non-fractional signed whole numeric values. Int can represent values between -(2^31) and 2^31 - 1.";

/// Coerces a runtime value to a 32-bit integer.
///
/// # Examples
///
/// ```
/// use gql_scalars::{scalars::int, Value};
///
/// assert_eq!(int::coerce(&Value::String("12".into())), Ok(12));
/// assert_eq!(
///     int::coerce(&Value::Float(1.5)).unwrap_err().to_string(),
///     "Int cannot represent non-integer value: 1.5"
/// );
/// ```
pub fn coerce(value: &Value) -> Result<i32, CoercionError> {
    if value.is_empty_string() {
        return Err(CoercionError::NonInt32(EMPTY_STRING.to_string()));
    }

    let num = value.to_number();
    if num.is_nan() || num > f64::from(MAX_INT) || num < f64::from(MIN_INT) {
        return Err(CoercionError::NonInt32(value.to_string()));
    }

    let int = num.floor();
    if int != num {
        return Err(CoercionError::NonInteger(value.to_string()));
    }

    Ok(int as i32)
}

pub fn serialize(value: &Value) -> Result<Value, CoercionError> {
    coerce(value).map(Value::from)
}

pub fn parse_value(value: &Value) -> Result<Value, CoercionError> {
    coerce(value).map(Value::from)
}

/// Reads an `Int` node as base-10. `None` for other kinds and for digits
/// outside the 32-bit range.
pub fn parse_literal(node: &Literal) -> Option<i32> {
    match node {
        Literal::Int(text) => text.parse::<i32>().ok(),
        _ => None,
    }
}

pub fn parse_literal_value(node: &Literal) -> Option<Value> {
    parse_literal(node).map(Value::from)
}
