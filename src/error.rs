//! Custom error types for the roster
//!
//! Every variant is recoverable: the interactive boundary reports it to the
//! user and returns to the menu.

use thiserror::Error;

/// The main error type for roster operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// An equal-valued record already exists
    #[error("Duplicate entry. Not added.")]
    DuplicateEntry,

    /// No record carries the given serial
    #[error("No matching SRNO found.")]
    NotFound { serial: u32 },

    /// A matching record was found but the user declined the deletion
    #[error("Deletion cancelled.")]
    DeletionCancelled { serial: u32 },

    /// Search requested an unsupported field or an unusable value
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Raw field input failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File or console I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The input stream reached end-of-file
    #[error("Input closed")]
    InputClosed,
}

impl RosterError {
    /// Create a "not found" error for a serial number
    pub fn not_found(serial: u32) -> Self {
        Self::NotFound { serial }
    }

    /// Create an "invalid selector" error
    pub fn invalid_selector(message: impl Into<String>) -> Self {
        Self::InvalidSelector(message.into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for roster operations
pub type RosterResult<T> = Result<T, RosterError>;
