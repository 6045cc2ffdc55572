//! Error types for the shell helpers
//!
//! Provides structured error handling with context and proper error chains.

use thiserror::Error;

/// Main error type for the shell helpers
#[derive(Error, Debug)]
pub enum HelperError {
    /// A version string that is not one or more dot-separated digit segments
    #[error("Malformed version '{input}': {reason}")]
    MalformedVersion { input: String, reason: String },

    /// Process spawn errors
    #[error("Process error: {command} failed: {message}")]
    Process {
        command: String,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl HelperError {
    /// Create a new malformed version error
    pub fn malformed_version(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedVersion {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a new process error
    pub fn process(
        command: impl Into<String>,
        message: impl Into<String>,
        source: Option<std::io::Error>,
    ) -> Self {
        Self::Process {
            command: command.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, HelperError>;
