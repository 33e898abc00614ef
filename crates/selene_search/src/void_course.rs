//! Void-of-course Moon deriver.
//!
//! **Void of course**: the interval from the Moon's final applying aspect
//! within its current sign until it enters the next sign. Between those
//! two instants the Moon perfects no further aspect.
//!
//! Derivation composes the two underlying searches: the next ingress
//! fixes the window's end, then the aspect search over `[start, ingress]`
//! decides its beginning. No aspects remaining means the Moon is already
//! void at the query instant (window starts there, `last_aspect = None`);
//! otherwise the window opens at the latest aspect found. Windows that
//! round below the significance threshold are reported as `None`, which
//! is an expected outcome rather than an error.

use selene_ephem::{Body, Ephemeris};
use selene_time::Instant;

use crate::aspect::find_upcoming_aspects;
use crate::error::SearchError;
use crate::ingress::find_next_ingress;
use crate::ingress_types::IngressEvent;
use crate::void_types::{LastAspect, VoidOfCourseConfig, VoidPeriod};

/// Sign-to-sign hops `next_void_period` makes before giving up; at ~2.2
/// days per sign this is about a month of lookahead.
const MAX_VOID_HOPS: u32 = 14;

/// One derivation step: the window opening in the Moon's current sign
/// (if significant) plus the ingress that closes the sign, which callers
/// use to hop onward. Assumes `config` is already validated.
pub(crate) fn void_window<E: Ephemeris + ?Sized>(
    oracle: &E,
    start: Instant,
    config: &VoidOfCourseConfig,
) -> Result<(Option<VoidPeriod>, IngressEvent), SearchError> {
    let ingress = find_next_ingress(oracle, Body::Moon, start, &config.ingress)?;
    let aspects = find_upcoming_aspects(
        oracle,
        Body::Moon,
        &config.aspect_bodies,
        start,
        ingress.time,
        &config.aspect,
    )?;

    let (window_start, last_aspect) = match aspects.last() {
        None => (start, None),
        Some(event) => (
            event.exact_time,
            Some(LastAspect { body: event.body, aspect: event.aspect, time: event.exact_time }),
        ),
    };

    let duration_minutes = window_start.minutes_until(ingress.time).round() as i64;
    if duration_minutes < config.min_duration_minutes {
        return Ok((None, ingress));
    }

    let period = VoidPeriod {
        start: window_start,
        end: ingress.time,
        last_aspect,
        moon_sign: ingress.from_sign,
        next_sign: ingress.to_sign,
        duration_minutes,
    };
    Ok((Some(period), ingress))
}

/// Derive the void-of-course window for the Moon's sign at `start`.
///
/// Returns `Ok(None)` when the window rounds below the significance
/// threshold.
pub fn compute_void_period<E: Ephemeris + ?Sized>(
    oracle: &E,
    start: Instant,
    config: &VoidOfCourseConfig,
) -> Result<Option<VoidPeriod>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    Ok(void_window(oracle, start, config)?.0)
}

/// Is the Moon void of course at `at`?
///
/// True exactly when `at` lies inside the significant window of the
/// current sign; a suppressed (sub-threshold) window reads as not void.
pub fn is_void_of_course<E: Ephemeris + ?Sized>(
    oracle: &E,
    at: Instant,
    config: &VoidOfCourseConfig,
) -> Result<bool, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    let (window, _) = void_window(oracle, at, config)?;
    Ok(window.is_some_and(|w| w.start <= at && at <= w.end))
}

/// Find the first significant void window starting after `from`.
///
/// When `from` already sits inside a window, the search continues from
/// just past that window's end. Hops sign to sign up to a fixed limit
/// and returns `Ok(None)` if every window in reach is suppressed.
pub fn next_void_period<E: Ephemeris + ?Sized>(
    oracle: &E,
    from: Instant,
    config: &VoidOfCourseConfig,
) -> Result<Option<VoidPeriod>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let mut t = from;
    for _ in 0..MAX_VOID_HOPS {
        let (window, ingress) = void_window(oracle, t, config)?;
        match window {
            Some(w) if w.start > from => return Ok(Some(w)),
            // The window covering `from` itself; skip past it.
            Some(w) => t = w.end.add_minutes(1.0),
            None => t = ingress.time.add_minutes(1.0),
        }
    }
    Ok(None)
}

/// Collect every significant void window whose start falls in
/// `[start, end]`, stepping ingress to ingress.
pub fn scan_void_periods<E: Ephemeris + ?Sized>(
    oracle: &E,
    start: Instant,
    end: Instant,
    config: &VoidOfCourseConfig,
) -> Result<Vec<VoidPeriod>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if end <= start {
        return Err(SearchError::InvalidConfig("end must be after start"));
    }

    let mut periods = Vec::new();
    let mut t = start;
    while t <= end {
        let (window, ingress) = void_window(oracle, t, config)?;
        if let Some(w) = window {
            if w.start <= end {
                periods.push(w);
            }
        }
        t = ingress.time.add_minutes(1.0);
    }
    Ok(periods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use selene_ephem::{BodyPosition, EphemerisError};
    use selene_zodiac::{AspectKind, ZodiacSign};

    /// Bodies on straight-line tracks, as in the sibling engine tests.
    struct LinearOracle {
        start_jd: f64,
        tracks: Vec<(Body, f64, f64)>,
    }

    impl LinearOracle {
        fn new(tracks: Vec<(Body, f64, f64)>) -> Self {
            Self { start_jd: 2_460_000.5, tracks }
        }

        fn start(&self) -> Instant {
            Instant::from_jd(self.start_jd)
        }
    }

    impl Ephemeris for LinearOracle {
        fn position(&self, body: Body, at: Instant) -> Result<BodyPosition, EphemerisError> {
            let dt = at.as_jd() - self.start_jd;
            for &(b, lon0, rate) in &self.tracks {
                if b == body {
                    return Ok(BodyPosition::new(lon0 + rate * dt, 0.0, 1.0, rate));
                }
            }
            Err(EphemerisError::UnsupportedBody(body))
        }
    }

    fn config_tracking(bodies: &[Body]) -> VoidOfCourseConfig {
        VoidOfCourseConfig { aspect_bodies: bodies.to_vec(), ..VoidOfCourseConfig::default() }
    }

    #[test]
    fn already_void_case_spans_to_ingress() {
        // Moon 5 deg from the boundary, no body anywhere near an aspect:
        // void from the query instant until the ingress ~9.23 h later.
        let oracle =
            LinearOracle::new(vec![(Body::Moon, 25.0, 13.0), (Body::Mars, 70.0, 0.0)]);
        let start = oracle.start();
        let period = compute_void_period(&oracle, start, &config_tracking(&[Body::Mars]))
            .unwrap()
            .expect("window should be significant");

        assert_eq!(period.start, start);
        assert!(period.last_aspect.is_none());
        assert_eq!(period.moon_sign, ZodiacSign::Aries);
        assert_eq!(period.next_sign, ZodiacSign::Taurus);
        let minutes = period.duration_minutes;
        assert!((minutes - 554).abs() <= 2, "minutes = {minutes}");
    }

    #[test]
    fn last_aspect_opens_the_window() {
        // Moon trines Mars ~55 min in, then runs void until the ingress.
        let oracle =
            LinearOracle::new(vec![(Body::Moon, 25.0, 13.0), (Body::Mars, 145.5, 0.0)]);
        let start = oracle.start();
        let period = compute_void_period(&oracle, start, &config_tracking(&[Body::Mars]))
            .unwrap()
            .expect("window should be significant");

        let last = period.last_aspect.expect("aspect should be recorded");
        assert_eq!(last.body, Body::Mars);
        assert_eq!(last.aspect, AspectKind::Trine);
        assert_eq!(period.start, last.time);
        let minutes_in = start.minutes_until(period.start);
        assert!((minutes_in - 55.4).abs() < 1.5, "minutes = {minutes_in}");
        // ~554 total minutes to ingress minus ~55 to the aspect.
        let minutes = period.duration_minutes;
        assert!((minutes - 499).abs() <= 2, "minutes = {minutes}");
    }

    #[test]
    fn window_end_is_the_ingress() {
        let oracle =
            LinearOracle::new(vec![(Body::Moon, 25.0, 13.0), (Body::Mars, 145.5, 0.0)]);
        let start = oracle.start();
        let config = config_tracking(&[Body::Mars]);
        let period = compute_void_period(&oracle, start, &config).unwrap().unwrap();
        let ingress =
            find_next_ingress(&oracle, Body::Moon, start, &config.ingress).unwrap();
        assert_eq!(period.end, ingress.time);
        assert!(period.start <= period.end);
    }

    #[test]
    fn short_window_suppressed() {
        // Moon 3 minutes of arc-time from the boundary: the whole sign
        // remainder rounds to ~3 minutes, below the 5-minute threshold.
        let lon0 = 30.0 - 13.0 * (3.0 / 1440.0);
        let oracle =
            LinearOracle::new(vec![(Body::Moon, lon0, 13.0), (Body::Mars, 200.0, 0.0)]);
        let period =
            compute_void_period(&oracle, oracle.start(), &config_tracking(&[Body::Mars])).unwrap();
        assert!(period.is_none());
    }

    #[test]
    fn is_void_true_when_already_void() {
        let oracle =
            LinearOracle::new(vec![(Body::Moon, 25.0, 13.0), (Body::Mars, 70.0, 0.0)]);
        let config = config_tracking(&[Body::Mars]);
        assert!(is_void_of_course(&oracle, oracle.start(), &config).unwrap());
    }

    #[test]
    fn is_void_false_while_aspect_pending() {
        // The trine perfects ~55 min from now, so the Moon is not yet void.
        let oracle =
            LinearOracle::new(vec![(Body::Moon, 25.0, 13.0), (Body::Mars, 145.5, 0.0)]);
        let config = config_tracking(&[Body::Mars]);
        assert!(!is_void_of_course(&oracle, oracle.start(), &config).unwrap());
    }

    #[test]
    fn next_void_returns_pending_window() {
        // Currently applying: the next window opens at the trine.
        let oracle =
            LinearOracle::new(vec![(Body::Moon, 25.0, 13.0), (Body::Mars, 145.5, 0.0)]);
        let start = oracle.start();
        let period = next_void_period(&oracle, start, &config_tracking(&[Body::Mars]))
            .unwrap()
            .expect("should find a window");
        assert!(period.start > start);
        assert!(period.last_aspect.is_some());
    }

    #[test]
    fn next_void_skips_the_current_window() {
        // Already void now; the next window belongs to a later sign.
        let oracle =
            LinearOracle::new(vec![(Body::Moon, 25.0, 13.0), (Body::Mars, 70.0, 0.0)]);
        let start = oracle.start();
        let config = config_tracking(&[Body::Mars]);
        let current = compute_void_period(&oracle, start, &config).unwrap().unwrap();
        let next = next_void_period(&oracle, start, &config)
            .unwrap()
            .expect("should find a later window");
        assert!(next.start > current.end);
        assert_ne!(next.moon_sign, current.moon_sign);
    }

    #[test]
    fn scan_collects_ordered_disjoint_windows() {
        let oracle =
            LinearOracle::new(vec![(Body::Moon, 25.0, 13.0), (Body::Mars, 70.0, 0.0)]);
        let start = oracle.start();
        let end = start.add_days(10.0);
        let periods =
            scan_void_periods(&oracle, start, end, &config_tracking(&[Body::Mars])).unwrap();

        // ~13 deg/day crosses a boundary every ~2.3 days.
        assert!(periods.len() >= 3, "found {}", periods.len());
        for pair in periods.windows(2) {
            assert!(pair[0].end <= pair[1].start);
            assert_eq!(pair[0].next_sign, pair[1].moon_sign);
        }
        for p in &periods {
            assert!(p.start >= start && p.start <= end);
            assert!(p.duration_minutes >= 5);
        }
    }

    #[test]
    fn scan_rejects_degenerate_range() {
        let oracle = LinearOracle::new(vec![(Body::Moon, 25.0, 13.0), (Body::Mars, 70.0, 0.0)]);
        let start = oracle.start();
        let err = scan_void_periods(&oracle, start, start, &config_tracking(&[Body::Mars]))
            .unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }

    #[test]
    fn invalid_config_rejected_up_front() {
        let oracle = LinearOracle::new(vec![(Body::Moon, 25.0, 13.0)]);
        let err = compute_void_period(&oracle, oracle.start(), &config_tracking(&[Body::Moon]))
            .unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }
}
