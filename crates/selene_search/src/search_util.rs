//! Shared helpers for the coarse-scan + bisection search engines.

use selene_ephem::{Body, BodyPosition, Ephemeris, EphemerisError};
use selene_time::Instant;

use crate::error::SearchError;

/// Search direction for the `next_*` / `prev_*` entry point pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchDirection {
    /// Search forward in time.
    Forward,
    /// Search backward in time.
    Backward,
}

/// Query the oracle and reject non-finite output.
///
/// Every search goes through this so a misbehaving provider surfaces as a
/// typed error instead of NaN propagating into a bisection.
pub(crate) fn checked_position<E: Ephemeris + ?Sized>(
    oracle: &E,
    body: Body,
    at: Instant,
) -> Result<BodyPosition, SearchError> {
    let pos = oracle.position(body, at)?;
    if !pos.is_finite() {
        return Err(SearchError::Ephemeris(EphemerisError::InvalidData(body)));
    }
    Ok(pos)
}

/// True when a sign change between consecutive samples is a real zero
/// crossing rather than the residual wrapping across the ±180° seam.
///
/// A genuine crossing moves the residual by less than half a revolution;
/// a seam jump moves it by nearly a full one.
pub(crate) fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Bisect a bracketing interval down to `convergence_days`.
///
/// `f_a` is the function value at `t_a`; the bracket must contain a sign
/// change. Returns the final `(t_a, t_b)` interval so the caller can pick
/// the midpoint or either bound as its convention requires.
pub(crate) fn bisect_bracket<F>(
    mut t_a: f64,
    mut f_a: f64,
    mut t_b: f64,
    max_iter: u32,
    convergence_days: f64,
    f_at: &F,
) -> Result<(f64, f64), SearchError>
where
    F: Fn(f64) -> Result<f64, SearchError>,
{
    for _ in 0..max_iter {
        if (t_b - t_a).abs() < convergence_days {
            break;
        }
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = f_at(t_mid)?;

        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
    }

    Ok((t_a, t_b))
}
