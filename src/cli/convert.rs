//! JSON text <-> runtime Value helpers

use super::CliError;
use crate::Value;

/// Parse JSON text into a runtime Value
pub fn parse_json_input(json: &str) -> Result<Value, CliError> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    Ok(Value::from(parsed))
}

/// Render a coerced Value as JSON text. Non-finite floats become `null`.
pub fn render_json(value: Value, pretty: bool) -> Result<String, CliError> {
    let json = serde_json::Value::from(value);
    let text = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    Ok(text)
}
