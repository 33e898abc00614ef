//! Types for the daily almanac driver.

use selene_zodiac::ZodiacSign;

use crate::phase_types::MoonPhase;
use crate::void_types::VoidPeriod;

/// One calendar day's almanac row.
///
/// Sign and phase are evaluated at 00:00 UTC; the void window is the
/// first significant window overlapping the day, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailySnapshot {
    /// Calendar year (UTC).
    pub year: i32,
    /// Calendar month 1..=12.
    pub month: u32,
    /// Calendar day of month.
    pub day: u32,
    /// Moon's sign at midnight.
    pub moon_sign: ZodiacSign,
    /// Moon's phase at midnight.
    pub phase: MoonPhase,
    /// First void-of-course window overlapping the day.
    pub void_period: Option<VoidPeriod>,
}
