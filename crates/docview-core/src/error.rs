//! Error types shared across the core.

use thiserror::Error;

/// Malformed user or configuration text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown color: {0:?}")]
    Color(String),
    #[error("Invalid number: {0:?}")]
    Number(String),
    #[error("Invalid dimension: {0:?}")]
    Dimension(String),
}

/// Saved state decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("Saved state truncated: need {needed} bytes at offset {offset}, {available} left")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("Invalid string length: {0}")]
    InvalidLength(i32),
    #[error("Saved string is not valid UTF-16")]
    InvalidUtf16,
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for saved state operations.
pub type StateResult<T> = Result<T, StateError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
