//! Geocentric solar position.
//!
//! Low-precision solar theory from Meeus, *Astronomical Algorithms*
//! 2nd ed., Chapter 25: mean longitude plus equation of center, with
//! aberration and nutation applied for the apparent longitude.
//! Accuracy is about 0.01 degrees over 1900-2100.

use crate::nutation::nutation_in_longitude_deg;

/// Constant aberration correction for the Sun, degrees.
const ABERRATION_DEG: f64 = -0.00569;

fn normalize_deg(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Geometric mean longitude of the Sun in degrees.
fn mean_longitude_deg(t: f64) -> f64 {
    normalize_deg(280.46646 + 36000.76983 * t + 0.0003032 * t * t)
}

/// Mean anomaly of the Sun in degrees.
fn mean_anomaly_deg(t: f64) -> f64 {
    normalize_deg(357.52911 + 35999.05029 * t - 0.0001537 * t * t)
}

/// Eccentricity of Earth's orbit.
fn eccentricity(t: f64) -> f64 {
    0.016708634 - 0.000042037 * t - 0.0000001267 * t * t
}

/// Equation of center in degrees.
fn equation_of_center_deg(t: f64) -> f64 {
    let m = mean_anomaly_deg(t).to_radians();
    (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin()
}

/// True (geometric) longitude of the Sun in degrees [0, 360).
pub fn geometric_longitude_deg(t: f64) -> f64 {
    normalize_deg(mean_longitude_deg(t) + equation_of_center_deg(t))
}

/// Apparent longitude of the Sun in degrees [0, 360): geometric
/// longitude corrected for aberration and nutation.
pub fn apparent_longitude_deg(t: f64) -> f64 {
    normalize_deg(geometric_longitude_deg(t) + ABERRATION_DEG + nutation_in_longitude_deg(t))
}

/// Earth-Sun distance in astronomical units.
pub fn distance_au(t: f64) -> f64 {
    let e = eccentricity(t);
    let nu = (mean_anomaly_deg(t) + equation_of_center_deg(t)).to_radians();
    1.000001018 * (1.0 - e * e) / (1.0 + e * nu.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pm180(deg: f64) -> f64 {
        let mut d = deg % 360.0;
        if d > 180.0 {
            d -= 360.0;
        } else if d <= -180.0 {
            d += 360.0;
        }
        d
    }

    /// Julian centuries of TT for a 2024 UTC date (delta-T ~ 74 s).
    fn centuries(jd_ut: f64) -> f64 {
        (jd_ut + 74.0 / 86_400.0 - 2_451_545.0) / 36_525.0
    }

    #[test]
    fn j2000_longitude() {
        // Known to better than 0.01 deg from the Ch. 25 worked values.
        let lon = apparent_longitude_deg(0.0);
        assert!((lon - 280.372).abs() < 0.02, "lon = {lon}");
    }

    #[test]
    fn march_equinox_2024() {
        // 2024-03-20T03:06Z: apparent solar longitude crosses 0.
        let jd = selene_time::calendar_to_jd(2024, 3, 20.0 + 3.0 / 24.0 + 6.0 / 1440.0);
        let lon = apparent_longitude_deg(centuries(jd));
        assert!(pm180(lon).abs() < 0.02, "lon = {lon}");
    }

    #[test]
    fn december_solstice_2024() {
        // 2024-12-21T09:20Z: apparent solar longitude crosses 270.
        let jd = selene_time::calendar_to_jd(2024, 12, 21.0 + 9.0 / 24.0 + 20.0 / 1440.0);
        let lon = apparent_longitude_deg(centuries(jd));
        assert!((lon - 270.0).abs() < 0.02, "lon = {lon}");
    }

    #[test]
    fn distance_annual_range() {
        // Perihelion ~0.9833 au in early January, aphelion ~1.0167 au in July.
        let jan = centuries(selene_time::calendar_to_jd(2024, 1, 3.0));
        let jul = centuries(selene_time::calendar_to_jd(2024, 7, 5.0));
        let r_jan = distance_au(jan);
        let r_jul = distance_au(jul);
        assert!((r_jan - 0.9833).abs() < 0.001, "r_jan = {r_jan}");
        assert!((r_jul - 1.0167).abs() < 0.001, "r_jul = {r_jul}");
    }

    #[test]
    fn longitude_advances_about_one_degree_per_day() {
        let t0 = centuries(2_460_400.5);
        let t1 = centuries(2_460_401.5);
        let advance = pm180(apparent_longitude_deg(t1) - apparent_longitude_deg(t0));
        assert!((0.9..1.1).contains(&advance), "advance = {advance}");
    }
}
