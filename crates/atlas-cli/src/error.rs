//! Error types for atlas-cli.

use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing command or missing arguments.
    #[error("{0}")]
    Usage(String),

    /// An argument could not be parsed.
    #[error("invalid value for <{name}>: {value:?}")]
    InvalidArgument { name: &'static str, value: String },

    /// An environment setting is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The grid rejected the input.
    #[error("Grid error: {0}")]
    Hex(#[from] atlas_hex::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
