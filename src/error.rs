use thiserror::Error;

/// How an empty string is rendered inside coercion messages.
pub const EMPTY_STRING: &str = "(empty string)";

/// A value a scalar refused to coerce.
///
/// The rendered message is the complete client-facing text; callers attach
/// location or field context around it, never inside it. Each variant holds
/// the offending value already stringified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    /// NaN, out of the signed 32-bit range, or the empty string
    #[error("Int cannot represent non 32-bit signed integer value: {0}")]
    NonInt32(String),

    /// In range but has a fractional part
    #[error("Int cannot represent non-integer value: {0}")]
    NonInteger(String),

    /// No numeric reading at all, or the empty string
    #[error("Float cannot represent non numeric value: {0}")]
    NonNumeric(String),

    /// Lists are never joined into a string
    #[error("String cannot represent an array value: [{0}]")]
    ArrayValue(String),
}

impl CoercionError {
    /// Name of the scalar that raised the error.
    pub fn scalar(&self) -> &'static str {
        match self {
            CoercionError::NonInt32(_) | CoercionError::NonInteger(_) => "Int",
            CoercionError::NonNumeric(_) => "Float",
            CoercionError::ArrayValue(_) => "String",
        }
    }
}
