//! Domain error types for pickwheel
//!
//! Provides structured error types for different domains:
//! - `PickerError` for precondition violations at the picker boundary
//! - `PickwheelError` as the top-level error type

use chrono::NaiveDate;
use thiserror::Error;

/// Top-level error type for pickwheel
#[derive(Debug, Error)]
pub enum PickwheelError {
    #[error("Picker error: {0}")]
    Picker(#[from] PickerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("{0}")]
    Other(String),
}

/// Invalid arguments handed to a picker.
///
/// These are programmer errors: the caller passed something the picker
/// cannot represent. Recoverable situations (impossible days, out of bounds
/// edits, exhausted digit constraints) never surface as errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PickerError {
    #[error("invalid argument: the list cannot be empty")]
    EmptyList,

    #[error("invalid argument: the value must be within the given list")]
    ValueNotInList,

    #[error("invalid argument: slot size must be a positive finite number, got {0}")]
    InvalidSlotSize(f32),

    #[error("invalid argument: minimum date {min} is after maximum date {max}")]
    InvertedBounds { min: NaiveDate, max: NaiveDate },

    #[error("invalid argument: {hours:02}:{minutes:02} is not a valid time")]
    InvalidTime { hours: u32, minutes: u32 },

    #[error("invalid argument: digit value {value} exceeds maximum {max}")]
    InvalidDigit { value: u8, max: u8 },
}

/// Result type alias for PickwheelError
pub type Result<T> = std::result::Result<T, PickwheelError>;

/// Result type alias for PickerError
pub type PickerResult<T> = std::result::Result<T, PickerError>;

// Conversion from anyhow::Error for the binary's error paths
impl From<anyhow::Error> for PickwheelError {
    fn from(err: anyhow::Error) -> Self {
        PickwheelError::Other(err.to_string())
    }
}

impl From<String> for PickwheelError {
    fn from(msg: String) -> Self {
        PickwheelError::Other(msg)
    }
}

impl From<&str> for PickwheelError {
    fn from(msg: &str) -> Self {
        PickwheelError::Other(msg.to_string())
    }
}
