//! Custom error types for spotlight-tour
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spotlight-tour operations
#[derive(Error, Debug)]
pub enum SpotlightError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Invalid tour deck contents
    #[error("Deck error: {0}")]
    Deck(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl SpotlightError {
    /// Create a deck error for a file with an unrecognized extension
    pub fn unsupported_deck_format(path: impl Into<String>) -> Self {
        Self::Deck(format!(
            "unsupported deck format (expected .json, .yaml or .yml): {}",
            path.into()
        ))
    }

    /// Check if this is a deck error
    pub fn is_deck(&self) -> bool {
        matches!(self, Self::Deck(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SpotlightError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpotlightError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for SpotlightError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for spotlight-tour operations
pub type SpotlightResult<T> = Result<T, SpotlightError>;
