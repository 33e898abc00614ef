//! UTC calendar date/time with sub-second precision.
//!
//! Provides `UtcTime`, the human-facing calendar form of an [`Instant`].

use std::str::FromStr;

use crate::Instant;
use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert to the continuous [`Instant`] representation.
    pub fn to_instant(&self) -> Instant {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        Instant::from_jd(calendar_to_jd(self.year, self.month, day_frac))
    }

    /// Convert an [`Instant`] back to calendar form.
    pub fn from_instant(at: Instant) -> Self {
        let (year, month, day_frac) = jd_to_calendar(at.as_jd());
        let day = day_frac.floor() as u32;
        let frac = day_frac.fract();
        let total_seconds = frac * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse "YYYY-MM-DDThh:mm:ssZ" or "YYYY-MM-DDThh:mm:ss".
    fn from_str(s: &str) -> Result<Self, TimeError> {
        let trimmed = s.trim_end_matches('Z');
        let parts: Vec<&str> = trimmed.split('T').collect();
        if parts.len() != 2 {
            return Err(TimeError::Parse(format!(
                "expected YYYY-MM-DDThh:mm:ssZ, got {s}"
            )));
        }
        let date_parts: Vec<&str> = parts[0].split('-').collect();
        let time_parts: Vec<&str> = parts[1].split(':').collect();
        if date_parts.len() != 3 || time_parts.len() != 3 {
            return Err(TimeError::Parse(format!("invalid date/time format: {s}")));
        }
        let field = |v: &str| -> Result<u32, TimeError> {
            v.parse().map_err(|_| TimeError::Parse(format!("invalid field '{v}' in {s}")))
        };
        let year: i32 = date_parts[0]
            .parse()
            .map_err(|_| TimeError::Parse(format!("invalid year in {s}")))?;
        let month = field(date_parts[1])?;
        let day = field(date_parts[2])?;
        let hour = field(time_parts[0])?;
        let minute = field(time_parts[1])?;
        let second: f64 = time_parts[2]
            .parse()
            .map_err(|_| TimeError::Parse(format!("invalid seconds in {s}")))?;

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(TimeError::InvalidDate(s.to_string()));
        }
        if hour >= 24 || minute >= 60 || !(0.0..61.0).contains(&second) {
            return Err(TimeError::InvalidDate(s.to_string()));
        }

        Ok(UtcTime::new(year, month, day, hour, minute, second))
    }
}
