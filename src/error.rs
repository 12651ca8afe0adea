//! Error types for timecode parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Errors that can occur when constructing a timecode from a string.
///
/// These are the only failure modes in the crate: the frame-count and
/// duration constructors are total functions, and parsed numeric fields are
/// deliberately not range-checked against the frame rate.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimecodeError {
    /// The input string was empty.
    #[error("Timecode string is empty")]
    EmptyInput,

    /// The input string did not match the timecode pattern.
    #[error("Invalid timecode format: {message}")]
    InvalidFormat {
        /// Description of the format error.
        message: String,
    },
}

impl TimecodeError {
    /// Create an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }
}
