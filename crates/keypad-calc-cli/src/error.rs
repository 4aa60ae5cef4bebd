//! Error types for the CLI

use keypad_calc::core::CalcError;
use keypad_calc::theme::ThemeError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Calculator rejected input
    #[error("{0}")]
    Calc(#[from] CalcError),

    /// Theme could not be loaded
    #[error("{0}")]
    Theme(#[from] ThemeError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be serialized
    #[error("Serialization failed: {message}")]
    Serialize {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create a serialization error
    #[must_use]
    pub fn serialize(message: impl Into<String>) -> Self {
        Self::Serialize {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::serialize(e.to_string())
    }
}

impl From<serde_yaml_ng::Error> for CliError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        Self::serialize(e.to_string())
    }
}
