//! Lunar phase computation and new/full moon search.
//!
//! **Phase**: the Sun→Moon elongation at an instant, bucketed into the
//! eight conventional phases with the illuminated fraction.
//!
//! **Phase events**: exact new moons (elongation 0°) and full moons
//! (elongation 180°), found by coarse scan for a genuine sign change of
//! the elongation residual followed by bisection. One synodic month is
//! ~29.53 days, so the default 40-day scan bound always contains the
//! next event of either kind.

use selene_ephem::{Body, Ephemeris};
use selene_time::{Instant, MINUTES_PER_DAY};
use selene_zodiac::{PhaseBucket, illumination_percent, normalize_360, normalize_pm180};

use crate::error::SearchError;
use crate::phase_types::{MoonPhase, PhaseEvent, PhaseEventKind, PhaseSearchConfig};
use crate::search_util::{SearchDirection, bisect_bracket, checked_position, is_genuine_crossing};

/// Sun→Moon elongation in degrees [0, 360).
fn elongation<E: Ephemeris + ?Sized>(oracle: &E, at: Instant) -> Result<f64, SearchError> {
    let moon = checked_position(oracle, Body::Moon, at)?;
    let sun = checked_position(oracle, Body::Sun, at)?;
    Ok(normalize_360(moon.longitude_deg - sun.longitude_deg))
}

/// The Moon's phase at `at`.
pub fn moon_phase<E: Ephemeris + ?Sized>(
    oracle: &E,
    at: Instant,
) -> Result<MoonPhase, SearchError> {
    let angle = elongation(oracle, at)?;
    Ok(MoonPhase {
        bucket: PhaseBucket::from_angle(angle),
        angle_deg: angle,
        illumination_percent: illumination_percent(angle),
    })
}

/// Coarse scan + bisection for the nearest phase event in one direction.
fn find_phase_event<E: Ephemeris + ?Sized>(
    oracle: &E,
    start: Instant,
    kind: PhaseEventKind,
    direction: SearchDirection,
    config: &PhaseSearchConfig,
) -> Result<Option<PhaseEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let step_days = config.step_hours / 24.0;
    let step = match direction {
        SearchDirection::Forward => step_days,
        SearchDirection::Backward => -step_days,
    };
    let max_steps = (config.max_scan_days / step_days).ceil() as usize;
    let target = kind.target_angle_deg();

    let residual_at = |t: f64| -> Result<f64, SearchError> {
        let e = elongation(oracle, Instant::from_jd(t))?;
        Ok(normalize_pm180(e - target))
    };

    let mut t_prev = start.as_jd();
    let mut f_prev = residual_at(t_prev)?;

    for _ in 0..max_steps {
        let t_curr = t_prev + step;
        let f_curr = residual_at(t_curr)?;

        if is_genuine_crossing(f_prev, f_curr) {
            let (t_a, f_a, t_b) = if t_prev < t_curr {
                (t_prev, f_prev, t_curr)
            } else {
                (t_curr, f_curr, t_prev)
            };
            let (lo, hi) = bisect_bracket(
                t_a,
                f_a,
                t_b,
                config.max_iterations,
                config.convergence_minutes / MINUTES_PER_DAY,
                &residual_at,
            )?;
            return Ok(Some(PhaseEvent { kind, time: Instant::from_jd(0.5 * (lo + hi)) }));
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    Ok(None)
}

/// Find the next new moon after `start`.
pub fn next_new_moon<E: Ephemeris + ?Sized>(
    oracle: &E,
    start: Instant,
    config: &PhaseSearchConfig,
) -> Result<Option<PhaseEvent>, SearchError> {
    find_phase_event(oracle, start, PhaseEventKind::NewMoon, SearchDirection::Forward, config)
}

/// Find the last new moon before `start`.
pub fn prev_new_moon<E: Ephemeris + ?Sized>(
    oracle: &E,
    start: Instant,
    config: &PhaseSearchConfig,
) -> Result<Option<PhaseEvent>, SearchError> {
    find_phase_event(oracle, start, PhaseEventKind::NewMoon, SearchDirection::Backward, config)
}

/// Find the next full moon after `start`.
pub fn next_full_moon<E: Ephemeris + ?Sized>(
    oracle: &E,
    start: Instant,
    config: &PhaseSearchConfig,
) -> Result<Option<PhaseEvent>, SearchError> {
    find_phase_event(oracle, start, PhaseEventKind::FullMoon, SearchDirection::Forward, config)
}

/// Find the last full moon before `start`.
pub fn prev_full_moon<E: Ephemeris + ?Sized>(
    oracle: &E,
    start: Instant,
    config: &PhaseSearchConfig,
) -> Result<Option<PhaseEvent>, SearchError> {
    find_phase_event(oracle, start, PhaseEventKind::FullMoon, SearchDirection::Backward, config)
}

/// Find every new and full moon in `[start, end]`, sorted by time.
pub fn search_phase_events<E: Ephemeris + ?Sized>(
    oracle: &E,
    start: Instant,
    end: Instant,
    config: &PhaseSearchConfig,
) -> Result<Vec<PhaseEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if end <= start {
        return Err(SearchError::InvalidConfig("end must be after start"));
    }

    let mut events = Vec::new();
    for kind in [PhaseEventKind::NewMoon, PhaseEventKind::FullMoon] {
        let mut t = start;
        loop {
            let Some(event) =
                find_phase_event(oracle, t, kind, SearchDirection::Forward, config)?
            else {
                break;
            };
            if event.time > end {
                break;
            }
            events.push(event);
            t = event.time.add_minutes(1.0);
        }
    }

    events.sort_by(|a, b| a.time.as_jd().total_cmp(&b.time.as_jd()));
    Ok(events)
}
