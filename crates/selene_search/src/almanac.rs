//! Daily almanac rows and the parallel range driver.
//!
//! **Almanac**: per-calendar-day rows (Moon sign, phase, first void
//! window of the day) a batch job can persist keyed by date. Rows are
//! independent of one another, so the range driver fans contiguous day
//! chunks out across scoped threads; the oracle is shared by reference
//! and must be `Sync`.

use selene_ephem::{Body, Ephemeris};
use selene_time::{Instant, UtcTime, jd_to_calendar};
use selene_zodiac::sign_from_longitude;

use crate::almanac_types::DailySnapshot;
use crate::error::SearchError;
use crate::phase::moon_phase;
use crate::search_util::checked_position;
use crate::void_course::void_window;
use crate::void_types::VoidOfCourseConfig;

fn validate_date(month: u32, day: u32) -> Result<(), SearchError> {
    if !(1..=12).contains(&month) {
        return Err(SearchError::InvalidConfig("month must be 1..=12"));
    }
    if !(1..=31).contains(&day) {
        return Err(SearchError::InvalidConfig("day must be 1..=31"));
    }
    Ok(())
}

/// Build one row from its midnight instant; the calendar fields are
/// derived back from the Julian date so range drivers can step in whole
/// days without re-doing calendar arithmetic.
fn snapshot_for_jd<E: Ephemeris + ?Sized>(
    oracle: &E,
    midnight_jd: f64,
    config: &VoidOfCourseConfig,
) -> Result<DailySnapshot, SearchError> {
    let (year, month, day_frac) = jd_to_calendar(midnight_jd);
    let day = day_frac as u32;
    let midnight = Instant::from_jd(midnight_jd);
    let day_end = midnight.add_days(1.0);

    let moon = checked_position(oracle, Body::Moon, midnight)?;
    let moon_sign = sign_from_longitude(moon.longitude_deg).sign;
    let phase = moon_phase(oracle, midnight)?;

    // First significant window overlapping [midnight, midnight + 1 day).
    // Windows derived from an instant never start before it, so a window
    // in progress at midnight comes back clamped to midnight.
    let mut void_period = None;
    let mut t = midnight;
    while t < day_end {
        let (window, ingress) = void_window(oracle, t, config)?;
        if let Some(w) = window {
            if w.start < day_end {
                void_period = Some(w);
            }
            break;
        }
        t = ingress.time.add_minutes(1.0);
    }

    Ok(DailySnapshot { year, month, day, moon_sign, phase, void_period })
}

/// Almanac row for one UTC calendar day.
pub fn daily_snapshot<E: Ephemeris + ?Sized>(
    oracle: &E,
    year: i32,
    month: u32,
    day: u32,
    config: &VoidOfCourseConfig,
) -> Result<DailySnapshot, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    validate_date(month, day)?;
    let midnight = Instant::from_utc(&UtcTime::new(year, month, day, 0, 0, 0.0));
    snapshot_for_jd(oracle, midnight.as_jd(), config)
}

/// Almanac rows for `days` consecutive days starting at the given date.
pub fn daily_snapshots<E: Ephemeris + ?Sized>(
    oracle: &E,
    year: i32,
    month: u32,
    day: u32,
    days: u32,
    config: &VoidOfCourseConfig,
) -> Result<Vec<DailySnapshot>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    validate_date(month, day)?;
    let first_jd = Instant::from_utc(&UtcTime::new(year, month, day, 0, 0, 0.0)).as_jd();

    let mut rows = Vec::with_capacity(days as usize);
    for i in 0..days {
        rows.push(snapshot_for_jd(oracle, first_jd + i as f64, config)?);
    }
    Ok(rows)
}

/// Parallel form of [`daily_snapshots`]: contiguous day chunks across
/// scoped worker threads, results concatenated in date order. The first
/// error in date order wins; later chunks still run to completion.
pub fn par_daily_snapshots<E: Ephemeris + Sync + ?Sized>(
    oracle: &E,
    year: i32,
    month: u32,
    day: u32,
    days: u32,
    workers: usize,
    config: &VoidOfCourseConfig,
) -> Result<Vec<DailySnapshot>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    validate_date(month, day)?;
    if workers == 0 {
        return Err(SearchError::InvalidConfig("workers must be > 0"));
    }

    if days == 0 {
        return Ok(Vec::new());
    }
    let first_jd = Instant::from_utc(&UtcTime::new(year, month, day, 0, 0, 0.0)).as_jd();

    let workers = workers.min(days as usize);
    let base = days as usize / workers;
    let extra = days as usize % workers;

    std::thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);
        let mut offset = 0usize;
        for w in 0..workers {
            let len = base + usize::from(w < extra);
            let chunk_start = offset;
            offset += len;
            handles.push(scope.spawn(move || -> Result<Vec<DailySnapshot>, SearchError> {
                let mut rows = Vec::with_capacity(len);
                for i in chunk_start..chunk_start + len {
                    rows.push(snapshot_for_jd(oracle, first_jd + i as f64, config)?);
                }
                Ok(rows)
            }));
        }

        let mut out = Vec::with_capacity(days as usize);
        for handle in handles {
            match handle.join() {
                Ok(chunk) => out.extend(chunk?),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        Ok(out)
    })
}
