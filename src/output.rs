//! Output normalization for wrapper objects.
//!
//! Custom scalars often hand back host objects (an identifier wrapper, a
//! date) instead of primitives. [`serialize_object()`] unwraps those before
//! the scalar's own checks run, so the scalar does not special-case every
//! wrapper type.
//!
//! # Examples
//!
//! ```
//! use gql_scalars::{output::serialize_object, Value, ValueObject};
//! use std::fmt;
//!
//! #[derive(Debug)]
//! struct ObjectId(u64);
//!
//! impl fmt::Display for ObjectId {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "oid:{}", self.0)
//!     }
//! }
//!
//! impl ValueObject for ObjectId {
//!     fn to_json(&self) -> Option<Value> {
//!         Some(Value::String(self.to_string()))
//!     }
//! }
//!
//! assert_eq!(serialize_object(Value::custom(ObjectId(7))), Value::String("oid:7".into()));
//! assert_eq!(serialize_object(Value::Integer(7)), Value::Integer(7));
//! ```

use crate::value::Value;

/// Reduces an object-like value to what should be sent to a client.
///
/// A primitive from the object's primitive extraction wins. Failing that,
/// its structured extraction is used. Anything else, including plain maps,
/// lists and primitives, passes through unchanged.
pub fn serialize_object(value: Value) -> Value {
    if let Value::Custom(custom) = &value {
        if let Some(primitive) = custom.object().value_of()
            && !primitive.is_object_like()
        {
            return primitive;
        }
        if let Some(structured) = custom.object().to_json() {
            return structured;
        }
    }
    value
}
