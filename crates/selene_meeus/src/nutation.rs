//! Nutation in longitude, low-accuracy form.
//!
//! Four leading terms of the 1980 IAU nutation series (Meeus,
//! *Astronomical Algorithms* 2nd ed., Chapter 22, abridged version).
//! Accurate to about 0.5 arc-seconds, which is three orders of magnitude
//! below the orb tolerances this oracle feeds.

/// Nutation in longitude (delta-psi) in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn nutation_in_longitude_deg(t: f64) -> f64 {
    // Longitude of the Moon's ascending node
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    // Mean longitudes of Sun and Moon
    let l_sun = (280.4665 + 36000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481267.8813 * t).to_radians();

    let arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    arcsec / 3600.0
}
