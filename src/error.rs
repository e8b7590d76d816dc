//! Error handling module for the length converter
//!
//! Provides the application-level error type. Conversion failures have their
//! own type in [`crate::converter`] and convert into this one with `?`.

use crate::converter::ConversionError;
use thiserror::Error;

/// Main error type for the application shell
#[derive(Error, Debug)]
pub enum LengthTuiError {
    /// IO errors (terminal, config and log files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Configuration errors (loading, parsing)
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid user input reaching the conversion engine
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, LengthTuiError>;

impl LengthTuiError {
    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
