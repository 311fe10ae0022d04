//! Detection engine error types.

use thiserror::Error;

/// Detection engine errors.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Out-of-order observation: timestamp {timestamp} is earlier than last seen {last_timestamp}")]
    OutOfOrderObservation { timestamp: i64, last_timestamp: i64 },

    #[error("Duplicate observation: timestamp {timestamp} was already seen")]
    DuplicateObservation { timestamp: i64 },

    #[error("Unknown detector type: {0}")]
    UnknownDetectorType(String),

    #[error("Invalid detector config: {0}")]
    InvalidConfig(String),

    #[error("Detection error: {0}")]
    DetectionError(String),
}

impl DetectError {
    /// Convenience constructor for invalid-parameter errors.
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        DetectError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for detection engine operations.
pub type Result<T> = std::result::Result<T, DetectError>;
