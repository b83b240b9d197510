//! Error types for gesture input

use thiserror::Error;

/// Errors raised while configuring or wiring gesture input.
///
/// Rejected gestures and invalid edits are not errors; they are reported
/// through feedback only.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Gesture threshold must be a positive finite number, got {0}")]
    InvalidThreshold(f32),

    #[error("Motion source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Gesture input is already listening")]
    AlreadyStarted,

    #[error("Gesture input is not listening")]
    NotStarted,
}

pub type Result<T> = std::result::Result<T, InputError>;
