//! Continuous UTC time for the lunar event engine.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - An `Instant` type, the sole independent variable of every search
//! - `UtcTime`, the calendar form used at API and CLI boundaries

pub mod error;
pub mod julian;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{J2000_JD, MINUTES_PER_DAY, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};
pub use utc_time::UtcTime;

/// A point in continuous UTC time, stored as a Julian date.
///
/// Every engine computation is a pure function of an `Instant` (and the
/// ephemeris oracle). The f64 day-count keeps sub-millisecond resolution
/// across the product's working range, so calendar round-trips lose
/// nothing beyond sub-second scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    jd: f64,
}

impl Instant {
    /// Create an instant from a UTC Julian date.
    pub fn from_jd(jd: f64) -> Self {
        Self { jd }
    }

    /// Create an instant from a UTC calendar time.
    pub fn from_utc(utc: &UtcTime) -> Self {
        utc.to_instant()
    }

    /// The UTC Julian date.
    pub fn as_jd(self) -> f64 {
        self.jd
    }

    /// Calendar form of this instant.
    pub fn to_utc(self) -> UtcTime {
        UtcTime::from_instant(self)
    }

    /// This instant shifted by a (possibly negative) number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self { jd: self.jd + days }
    }

    /// This instant shifted by a (possibly negative) number of minutes.
    pub fn add_minutes(self, minutes: f64) -> Self {
        Self { jd: self.jd + minutes / MINUTES_PER_DAY }
    }

    /// Signed span from `self` to `other` in days.
    pub fn days_until(self, other: Instant) -> f64 {
        other.jd - self.jd
    }

    /// Signed span from `self` to `other` in minutes.
    pub fn minutes_until(self, other: Instant) -> f64 {
        (other.jd - self.jd) * MINUTES_PER_DAY
    }
}
