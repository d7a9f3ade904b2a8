use std::{collections::HashMap, fmt, sync::Arc};

use crate::number::{format_number, parse_numeric_string};

/// A runtime value handed to a scalar for coercion.
///
/// This is the loosely typed world scalars convert from: resolver results
/// on the way out, query variables on the way in. Integers and floats are
/// kept apart so integral input survives untouched, but every variant has a
/// numeric, textual and boolean reading (see [`Value::to_number`],
/// the `Display` impl and [`Value::is_truthy`]).
///
/// # Examples
///
/// ```
/// use gql_scalars::Value;
///
/// assert_eq!(Value::String(" 12 ".into()).to_number(), 12.0);
/// assert_eq!(Value::Float(4.0).to_string(), "4");
/// assert!(Value::Array(vec![]).is_truthy());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent / null
    Null,

    /// true or false
    Boolean(bool),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// Double-precision number, including NaN and the infinities
    Float(f64),

    /// UTF-8 string
    String(String),

    /// List of values
    Array(Vec<Value>),

    /// Plain map with no conversion capabilities of its own
    Object(HashMap<String, Value>),

    /// Host object that knows how to convert itself
    Custom(CustomValue),
}

/// Conversion capabilities a host object may expose.
///
/// Both extraction hooks default to "not provided". The `Display` impl is
/// the object's string form, used wherever the value is stringified.
pub trait ValueObject: fmt::Debug + fmt::Display + Send + Sync {
    /// Primitive extraction. Returning an object-like value means the
    /// capability yields nothing usable.
    fn value_of(&self) -> Option<Value> {
        None
    }

    /// Structured extraction, used for output when no primitive is available.
    fn to_json(&self) -> Option<Value> {
        None
    }
}

/// Shared handle to a [`ValueObject`]. Equality is identity.
#[derive(Debug, Clone)]
pub struct CustomValue(Arc<dyn ValueObject>);

impl CustomValue {
    pub fn new(object: impl ValueObject + 'static) -> Self {
        CustomValue(Arc::new(object))
    }

    pub fn object(&self) -> &dyn ValueObject {
        self.0.as_ref()
    }
}

impl PartialEq for CustomValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Value {
    /// Wraps a host object.
    pub fn custom(object: impl ValueObject + 'static) -> Self {
        Value::Custom(CustomValue::new(object))
    }

    /// Arrays, maps and host objects; everything else is a primitive.
    pub fn is_object_like(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_) | Value::Custom(_))
    }

    pub fn is_empty_string(&self) -> bool {
        matches!(self, Value::String(s) if s.is_empty())
    }

    /// Generic boolean conversion.
    ///
    /// Only null, `false`, zero, NaN and the empty string are falsy. Empty
    /// arrays and objects are truthy.
    pub fn is_truthy(&self) -> bool {
        use Value::*;
        match self {
            Null => false,
            Boolean(b) => *b,
            Integer(n) => *n != 0,
            Float(n) => *n != 0.0 && !n.is_nan(),
            String(s) => !s.is_empty(),
            Array(_) | Object(_) | Custom(_) => true,
        }
    }

    /// Generic numeric conversion. Yields NaN when there is no numeric reading.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Null => 0.0,
            Value::Boolean(b) => f64::from(u8::from(*b)),
            Value::Integer(n) => *n as f64,
            Value::Float(n) => *n,
            Value::String(s) => parse_numeric_string(s),
            Value::Array(_) => parse_numeric_string(&self.to_string()),
            Value::Object(_) => f64::NAN,
            Value::Custom(custom) => match custom.object().value_of() {
                Some(primitive) if !primitive.is_object_like() => primitive.to_number(),
                _ => parse_numeric_string(&custom.object().to_string()),
            },
        }
    }

    /// Returns a human-readable type name
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Custom(_) => "custom",
        }
    }
}

/// Generic string conversion.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", format_number(*n)),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    // Nested nulls print as nothing
                    if !matches!(item, Value::Null) {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => write!(f, "[object Object]"),
            Value::Custom(custom) => write!(f, "{}", custom.object()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    /// Non-finite floats become `null`; host objects go through
    /// [`serialize_object`](crate::output::serialize_object) and fall back
    /// to their string form.
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(b),
            Value::Integer(i) => serde_json::Value::Number(i.into()),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::Custom(custom) => match crate::output::serialize_object(Value::Custom(custom)) {
                Value::Custom(custom) => serde_json::Value::String(custom.object().to_string()),
                normalized => serde_json::Value::from(normalized),
            },
        }
    }
}
