//! Error types for calendar parsing and conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from datetime string parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Input does not match the expected ISO-8601 layout.
    Parse(String),
    /// Calendar fields are outside their valid ranges.
    InvalidDate(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "datetime parse error: {msg}"),
            Self::InvalidDate(msg) => write!(f, "invalid calendar date: {msg}"),
        }
    }
}

impl Error for TimeError {}
