//! Self-contained analytic ephemeris provider.
//!
//! Implements [`Ephemeris`] from truncated Meeus series (Sun, Moon,
//! nutation) and Standish mean Keplerian elements (planets), with no
//! external data files. Accuracy is roughly 0.01 degrees for the Sun,
//! 0.05 degrees for the Moon, and a tenth of a degree for the planets
//! over the 1900-2100 window, which resolves event times to well under
//! the minute-level convergence the searches ask for.
//!
//! Input instants are UT; the provider applies its own Delta-T model
//! internally to evaluate the series in TT.

pub mod moon;
pub mod nutation;
pub mod planets;
pub mod sun;

use selene_ephem::{Body, BodyPosition, Ephemeris, EphemerisError};
use selene_time::{Instant, J2000_JD, SECONDS_PER_DAY};

/// Kilometres per astronomical unit (IAU 2012).
const AU_KM: f64 = 149_597_870.7;

/// Step for the central-difference longitude speed, in days.
const SPEED_STEP_DAYS: f64 = 0.05;

fn normalize_pm180(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r > 180.0 {
        r - 360.0
    } else if r <= -180.0 {
        r + 360.0
    } else {
        r
    }
}

/// Difference TT - UT in seconds for a fractional year.
///
/// Quadratic fit published for 2005-2050; it stays smooth and
/// small-valued outside that range, which is adequate here since an
/// error of even a full minute in Delta-T shifts the Moon by under
/// half an arcminute.
pub fn delta_t_seconds(year: f64) -> f64 {
    let dy = year - 2000.0;
    62.92 + 0.32217 * dy + 0.005589 * dy * dy
}

/// Julian centuries of TT since J2000.0 for a UT Julian day.
fn centuries_tt(jd_ut: f64) -> f64 {
    let year = 2000.0 + (jd_ut - J2000_JD) / 365.25;
    let jd_tt = jd_ut + delta_t_seconds(year) / SECONDS_PER_DAY;
    (jd_tt - J2000_JD) / 36_525.0
}

/// `(longitude_deg, latitude_deg, distance_au)` or `None` when the
/// body has no series here.
fn ecliptic_state(body: Body, t: f64) -> Option<(f64, f64, f64)> {
    let state = match body {
        Body::Sun => (sun::apparent_longitude_deg(t), 0.0, sun::distance_au(t)),
        Body::Moon => {
            let (lon, lat, km) = moon::apparent_position(t);
            (lon, lat, km / AU_KM)
        }
        other => {
            let row = planets::planet_row(other)?;
            planets::apparent_position(row, t)
        }
    };
    Some(state)
}

/// Analytic ephemeris with no runtime data dependencies.
///
/// Zero-sized and freely copyable; a single value can be shared across
/// worker threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeeusEphemeris;

impl MeeusEphemeris {
    pub fn new() -> Self {
        Self
    }
}

impl Ephemeris for MeeusEphemeris {
    fn position(&self, body: Body, at: Instant) -> Result<BodyPosition, EphemerisError> {
        let jd = at.as_jd();
        if !jd.is_finite() {
            return Err(EphemerisError::InvalidInstant(jd));
        }

        let (lon, lat, dist) =
            ecliptic_state(body, centuries_tt(jd)).ok_or(EphemerisError::UnsupportedBody(body))?;

        let lon_before = ecliptic_state(body, centuries_tt(jd - SPEED_STEP_DAYS))
            .ok_or(EphemerisError::UnsupportedBody(body))?
            .0;
        let lon_after = ecliptic_state(body, centuries_tt(jd + SPEED_STEP_DAYS))
            .ok_or(EphemerisError::UnsupportedBody(body))?
            .0;
        let speed = normalize_pm180(lon_after - lon_before) / (2.0 * SPEED_STEP_DAYS);

        Ok(BodyPosition::new(lon, lat, dist, speed))
    }
}
