//! CLI support for gql-scalars
//!
//! Provides programmatic access to the command-line operations so other
//! tools can run the same coercions without shelling out.

mod coerce;
mod convert;
mod scalars;

pub use coerce::{execute_coerce, CoerceMode, CoerceOptions, CoerceOutcome};
pub use convert::{parse_json_input, render_json};
pub use scalars::scalars_overview;

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Literal text did not parse
    Parse(crate::ParseError),
    /// The scalar rejected the value
    Coercion(crate::CoercionError),
    /// JSON parsing error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
    /// Not one of the specified scalars
    UnknownScalar(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Parse(e) => write!(f, "Parse error: {}", e),
            CliError::Coercion(e) => write!(f, "Coercion error: {}", e),
            CliError::Json(e) => write!(f, "Invalid JSON: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => write!(f, "No input provided. Use --input/--literal or pipe it to stdin."),
            CliError::UnknownScalar(name) => {
                write!(f, "Unknown scalar: '{}'\nRun 'gql-scalars scalars' to see available scalars.", name)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse(e) => Some(e),
            CliError::Coercion(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::ParseError> for CliError {
    fn from(e: crate::ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<crate::CoercionError> for CliError {
    fn from(e: crate::CoercionError) -> Self {
        CliError::Coercion(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
