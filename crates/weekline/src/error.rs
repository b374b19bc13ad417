//! Error types for weekline operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeeklineError {
    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Input too short: the fixed date format needs {expected} characters, got {got}")]
    InputTooShort { expected: usize, got: usize },

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, WeeklineError>;
