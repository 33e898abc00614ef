//! Sign-ingress search engine.
//!
//! **Ingress search**: finds when a body's ecliptic longitude crosses a
//! zodiac sign boundary (a multiple of 30 degrees).
//!
//! Algorithm: bounded bisection on the signed circular offset of the
//! longitude from the target boundary. Comparing through the signed
//! offset rather than raw longitude keeps the Pisces→Aries crossing
//! (330°..360° → 0°) indistinguishable from any other boundary. If the
//! offset has not crossed zero by the horizon, the search fails with
//! `SearchError::HorizonExceeded` rather than guessing.

use selene_ephem::{Body, Ephemeris};
use selene_time::{Instant, MINUTES_PER_DAY};
use selene_zodiac::{normalize_360, sign_from_longitude, signed_offset};

use crate::error::SearchError;
use crate::ingress_types::{IngressEvent, IngressSearchConfig};
use crate::search_util::{SearchDirection, checked_position};

/// Bisection driver shared by the forward and backward searches.
fn find_ingress_event<E: Ephemeris + ?Sized>(
    oracle: &E,
    body: Body,
    start: Instant,
    direction: SearchDirection,
    config: &IngressSearchConfig,
) -> Result<IngressEvent, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let pos = checked_position(oracle, body, start)?;
    let here = sign_from_longitude(pos.longitude_deg);

    // Forward: the crossing out of the current sign at its upper boundary.
    // Backward: the crossing into the current sign at its lower boundary.
    let (from_sign, to_sign, boundary) = match direction {
        SearchDirection::Forward => (
            here.sign,
            here.sign.next(),
            normalize_360((here.sign_index as f64 + 1.0) * 30.0),
        ),
        SearchDirection::Backward => (here.sign.prev(), here.sign, here.sign.start_deg()),
    };

    let offset_at = |t: f64| -> Result<f64, SearchError> {
        let p = checked_position(oracle, body, Instant::from_jd(t))?;
        Ok(signed_offset(boundary, p.longitude_deg))
    };

    // The offset is negative before the crossing and non-negative after
    // it. The start instant pins one side; the far end of the horizon
    // must pin the other or the crossing is out of reach.
    let t0 = start.as_jd();
    let (mut lo, mut hi) = match direction {
        SearchDirection::Forward => (t0, t0 + config.horizon_days),
        SearchDirection::Backward => (t0 - config.horizon_days, t0),
    };
    let crossed = match direction {
        SearchDirection::Forward => offset_at(hi)? >= 0.0,
        SearchDirection::Backward => offset_at(lo)? < 0.0,
    };
    if !crossed {
        return Err(SearchError::HorizonExceeded {
            horizon_days: config.horizon_days,
            what: "sign ingress",
        });
    }

    let convergence = config.convergence_minutes / MINUTES_PER_DAY;
    for _ in 0..config.max_iterations {
        if (hi - lo) < convergence {
            break;
        }
        let mid = 0.5 * (lo + hi);
        if offset_at(mid)? >= 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    Ok(IngressEvent { from_sign, to_sign, time: Instant::from_jd(hi), longitude_deg: boundary })
}

/// Find the next sign boundary crossing of `body` after `start`.
///
/// Errors with `HorizonExceeded` when the body does not reach the next
/// boundary within `config.horizon_days`.
pub fn find_next_ingress<E: Ephemeris + ?Sized>(
    oracle: &E,
    body: Body,
    start: Instant,
    config: &IngressSearchConfig,
) -> Result<IngressEvent, SearchError> {
    find_ingress_event(oracle, body, start, SearchDirection::Forward, config)
}

/// Find the most recent sign boundary crossing of `body` before `start`.
pub fn find_prev_ingress<E: Ephemeris + ?Sized>(
    oracle: &E,
    body: Body,
    start: Instant,
    config: &IngressSearchConfig,
) -> Result<IngressEvent, SearchError> {
    find_ingress_event(oracle, body, start, SearchDirection::Backward, config)
}

/// Find every ingress of `body` in `[start, end]`, stepping crossing to
/// crossing.
///
/// Each step reuses the single-crossing search, so `config.horizon_days`
/// must cover the body's longest stay in one sign (the default covers
/// the Moon).
pub fn search_ingresses<E: Ephemeris + ?Sized>(
    oracle: &E,
    body: Body,
    start: Instant,
    end: Instant,
    config: &IngressSearchConfig,
) -> Result<Vec<IngressEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if end <= start {
        return Err(SearchError::InvalidConfig("end must be after start"));
    }

    let mut events = Vec::new();
    let mut t = start;
    loop {
        let event = find_next_ingress(oracle, body, t, config)?;
        if event.time > end {
            break;
        }
        events.push(event);
        t = event.time.add_minutes(1.0);
    }
    Ok(events)
}
