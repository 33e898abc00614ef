//! Upcoming-aspect search engine.
//!
//! **Aspect search**: finds when the angular separation between a reference
//! body and each tracked body becomes exactly one of the five major aspect
//! angles (0, 60, 90, 120, 180 degrees), considering only aspects already
//! forming, within orb, at the start instant.
//!
//! Algorithm: the signed separation is reduced against the matched aspect
//! angle to a residual f(t); a coarse fixed-step scan brackets a genuine
//! sign change of f, then bisection refines to sub-minute precision. When
//! the scan finds no sign change but some sample residual is below the
//! epsilon threshold, that sample is kept as a grazing pass. Each tracked
//! body yields at most one event.

use selene_ephem::{Body, Ephemeris};
use selene_time::{Instant, MINUTES_PER_DAY};
use selene_zodiac::{AspectKind, aspect_residual, normalize_pm180, separation, signed_offset};

use crate::aspect_types::{AspectEvent, AspectSearchConfig};
use crate::error::SearchError;
use crate::search_util::{bisect_bracket, checked_position, is_genuine_crossing};

// ---------------------------------------------------------------------------
// Residual plumbing
// ---------------------------------------------------------------------------

/// Signed separation reference − other, reduced to (−180, 180].
fn signed_separation<E: Ephemeris + ?Sized>(
    oracle: &E,
    reference: Body,
    other: Body,
    at: Instant,
) -> Result<f64, SearchError> {
    let ref_pos = checked_position(oracle, reference, at)?;
    let other_pos = checked_position(oracle, other, at)?;
    Ok(signed_offset(other_pos.longitude_deg, ref_pos.longitude_deg))
}

/// Residual of the signed separation against a signed target angle.
///
/// Re-wrapping keeps the residual continuous where the separation itself
/// wraps at the ±180° seam (oppositions cross exactly there).
fn residual(signed_sep: f64, target_deg: f64) -> f64 {
    normalize_pm180(signed_sep - target_deg)
}

/// Fill in the event fields from the refined event time.
fn build_event<E: Ephemeris + ?Sized>(
    oracle: &E,
    reference: Body,
    other: Body,
    aspect: AspectKind,
    at: Instant,
) -> Result<AspectEvent, SearchError> {
    let ref_pos = checked_position(oracle, reference, at)?;
    let other_pos = checked_position(oracle, other, at)?;
    Ok(AspectEvent {
        body: other,
        aspect,
        exact_angle_deg: separation(ref_pos.longitude_deg, other_pos.longitude_deg),
        exact_time: at,
        orb_deg: aspect_residual(ref_pos.longitude_deg, other_pos.longitude_deg, aspect),
    })
}

// ---------------------------------------------------------------------------
// Per-body search
// ---------------------------------------------------------------------------

/// Locate the exact time of the aspect the pair is forming at `start`,
/// if any, by coarse scan + bisection over the configured horizon.
fn find_body_aspect<E: Ephemeris + ?Sized>(
    oracle: &E,
    reference: Body,
    other: Body,
    start: Instant,
    config: &AspectSearchConfig,
) -> Result<Option<AspectEvent>, SearchError> {
    let d_start = signed_separation(oracle, reference, other, start)?;
    let Some(aspect) = AspectKind::matching(d_start.abs(), config.orb_deg) else {
        return Ok(None);
    };

    // Sign the target with the current geometry so the residual passes
    // through zero (rather than a fold) as the aspect becomes exact.
    let target = if d_start < 0.0 { -aspect.angle_deg() } else { aspect.angle_deg() };

    let t_start = start.as_jd();
    let step_days = config.step_minutes / MINUTES_PER_DAY;
    let horizon_days = config.horizon_hours / 24.0;
    let steps = (horizon_days / step_days).ceil() as usize;

    let residual_at = |t: f64| -> Result<f64, SearchError> {
        let d = signed_separation(oracle, reference, other, Instant::from_jd(t))?;
        Ok(residual(d, target))
    };

    let mut t_prev = t_start;
    let mut f_prev = residual(d_start, target);
    let mut best_t = t_prev;
    let mut best_abs = f_prev.abs();

    for i in 1..=steps {
        let t_curr = (t_start + i as f64 * step_days).min(t_start + horizon_days);
        let f_curr = residual_at(t_curr)?;

        if is_genuine_crossing(f_prev, f_curr) {
            let (t_a, t_b) = bisect_bracket(
                t_prev,
                f_prev,
                t_curr,
                config.max_iterations,
                config.convergence_minutes / MINUTES_PER_DAY,
                &residual_at,
            )?;
            let refined = Instant::from_jd(0.5 * (t_a + t_b));
            let event = build_event(oracle, reference, other, aspect, refined)?;
            return Ok(Some(event));
        }

        if f_curr.abs() < best_abs {
            best_t = t_curr;
            best_abs = f_curr.abs();
        }
        t_prev = t_curr;
        f_prev = f_curr;
    }

    // Grazing pass: closest approach never changed sign but came within
    // epsilon of exact.
    if best_abs <= config.epsilon_deg {
        let event = build_event(oracle, reference, other, aspect, Instant::from_jd(best_t))?;
        return Ok(Some(event));
    }

    Ok(None)
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Find upcoming exact aspects between `reference` and each of `others`.
///
/// Only pairs already within orb of an aspect at `start` are searched
/// (the caller is asking "what is about to perfect", not for a general
/// timeline). Events are sorted ascending by time and restricted to
/// `[start, end]`.
pub fn find_upcoming_aspects<E: Ephemeris + ?Sized>(
    oracle: &E,
    reference: Body,
    others: &[Body],
    start: Instant,
    end: Instant,
    config: &AspectSearchConfig,
) -> Result<Vec<AspectEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if end <= start {
        return Err(SearchError::InvalidConfig("end must be after start"));
    }
    if others.contains(&reference) {
        return Err(SearchError::InvalidConfig(
            "tracked bodies must not include the reference body",
        ));
    }

    let mut events = Vec::new();
    for &other in others {
        if let Some(event) = find_body_aspect(oracle, reference, other, start, config)? {
            if event.exact_time >= start && event.exact_time <= end {
                events.push(event);
            }
        }
    }

    events.sort_by(|a, b| a.exact_time.as_jd().total_cmp(&b.exact_time.as_jd()));
    Ok(events)
}
