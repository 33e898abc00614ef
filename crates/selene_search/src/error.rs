//! Error type shared by all search entry points.

use std::error::Error;
use std::fmt;

use selene_ephem::EphemerisError;

/// Errors produced by the search engines.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// A configuration knob or search range is invalid.
    InvalidConfig(&'static str),
    /// The ephemeris oracle failed or returned unusable data.
    Ephemeris(EphemerisError),
    /// A bounded search ran out of horizon without finding its crossing.
    HorizonExceeded {
        /// The horizon that was exhausted, in days.
        horizon_days: f64,
        /// What was being searched for.
        what: &'static str,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::HorizonExceeded { horizon_days, what } => {
                write!(f, "no {what} found within {horizon_days} day horizon")
            }
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
