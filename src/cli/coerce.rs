//! Run one scalar conversion against command-line input

use tracing::debug;

use super::{parse_json_input, CliError};
use crate::{lookup_scalar, parse_literal, Value};

/// Which conversion direction to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoerceMode {
    /// Internal value to client output
    #[default]
    Serialize,
    /// Client variable to internal value
    ParseValue,
    /// Query-text literal to internal value
    ParseLiteral,
}

/// Options for a coerce operation
#[derive(Debug, Clone, Default)]
pub struct CoerceOptions {
    /// Scalar name, e.g. `Int`
    pub scalar: String,
    pub mode: CoerceMode,
    /// JSON text, or literal source text in `ParseLiteral` mode
    pub input: Option<String>,
}

/// Result of a coerce operation
#[derive(Debug, PartialEq)]
pub enum CoerceOutcome {
    /// The scalar produced a value
    Coerced(Value),
    /// The literal's kind does not fit the scalar
    NotApplicable,
}

/// Execute a coerce operation
pub fn execute_coerce(options: &CoerceOptions) -> Result<CoerceOutcome, CliError> {
    let scalar = lookup_scalar(&options.scalar)
        .ok_or_else(|| CliError::UnknownScalar(options.scalar.clone()))?;
    let input = options.input.as_deref().ok_or(CliError::NoInput)?;

    debug!(scalar = scalar.name(), mode = ?options.mode, "coercing input");

    let outcome = match options.mode {
        CoerceMode::Serialize => CoerceOutcome::Coerced(scalar.serialize(&parse_json_input(input)?)?),
        CoerceMode::ParseValue => CoerceOutcome::Coerced(scalar.parse_value(&parse_json_input(input)?)?),
        CoerceMode::ParseLiteral => match scalar.parse_literal(&parse_literal(input.trim())?) {
            Some(value) => CoerceOutcome::Coerced(value),
            None => CoerceOutcome::NotApplicable,
        },
    };

    Ok(outcome)
}
