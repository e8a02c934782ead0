//! Error types for snipkit
//!
//! Only the I/O edges (config file, CLI input) can fail. Detection,
//! tagging and highlighting are total and never return these.

use thiserror::Error;

/// Result type alias for snipkit operations
pub type Result<T> = std::result::Result<T, SnipError>;

/// Errors raised at the edges of the crate
#[derive(Error, Debug)]
pub enum SnipError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Cannot serialize config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Message(String),
}
