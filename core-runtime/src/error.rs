//! # Runtime Error Types

use thiserror::Error;

/// Errors raised by runtime bootstrap.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Logging configuration was invalid or logging was already initialized.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;
