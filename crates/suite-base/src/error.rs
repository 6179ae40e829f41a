//! Error types for suite-base

use crate::suite::SuitePhase;

/// Result type for suite-base operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in suite-base operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "Version reference '{reference}' is too short: expected at least 8 characters, got {len}"
    )]
    ReferenceTooShort { reference: String, len: usize },

    #[error("Checkout of '{repository}' at '{version}' failed: {message}")]
    Checkout {
        repository: String,
        version: String,
        message: String,
    },

    #[error("Prefetch from '{url}' failed: {message}")]
    Prefetch { url: String, message: String },

    #[error("Log capture '{name}' failed: {message}")]
    Capture { name: String, message: String },

    #[error("Shell step failed: {0}")]
    Shell(String),

    #[error("Cannot {operation}: suite is {actual}, expected {expected}")]
    Lifecycle {
        operation: &'static str,
        expected: SuitePhase,
        actual: SuitePhase,
    },

    #[error("Invalid suite configuration: {0}")]
    Config(String),

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
