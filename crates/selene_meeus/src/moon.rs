//! Geocentric lunar position.
//!
//! Truncated ELP-derived periodic series from Meeus, *Astronomical
//! Algorithms* 2nd ed., Chapter 47 (Tables 47.A and 47.B). The full
//! tables carry 60 terms each; the leading terms kept here bound the
//! truncation error near 0.02 degrees in longitude and latitude and a
//! few hundred kilometres in distance, well inside what the event
//! searches downstream can distinguish.

use crate::nutation::nutation_in_longitude_deg;

/// Mean Earth-Moon distance baseline, km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

fn normalize_deg(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Fundamental lunar arguments in degrees, plus the eccentricity factor.
///
/// Returns `(lp, d, m, mp, f, a1, a2, a3, e)`:
/// - `lp` mean longitude, `d` mean elongation, `m` solar mean anomaly,
///   `mp` lunar mean anomaly, `f` argument of latitude
/// - `a1`..`a3` planetary additive arguments
/// - `e` the eccentricity damping factor for solar-anomaly terms
#[allow(clippy::type_complexity)]
pub(crate) fn fundamental_arguments(t: f64) -> (f64, f64, f64, f64, f64, f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = normalize_deg(
        218.3164477 + 481_267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0 - t4 / 65_194_000.0,
    );
    let d = normalize_deg(
        297.8501921 + 445_267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0 - t4 / 113_065_000.0,
    );
    let m = normalize_deg(357.5291092 + 35_999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0);
    let mp = normalize_deg(
        134.9633964 + 477_198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0 - t4 / 14_712_000.0,
    );
    let f = normalize_deg(
        93.2720950 + 483_202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0 + t4 / 863_310_000.0,
    );

    let a1 = normalize_deg(119.75 + 131.849 * t);
    let a2 = normalize_deg(53.09 + 479_264.290 * t);
    let a3 = normalize_deg(313.45 + 481_266.484 * t);

    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;

    (lp, d, m, mp, f, a1, a2, a3, e)
}

// Leading terms of Meeus Table 47.A.
// Columns: [D, M, M', F, sigma_l (1e-6 deg), sigma_r (1e-3 km)].
// sine arguments feed longitude, cosine arguments feed distance.
#[rustfmt::skip]
static LON_DIST_TERMS: [[f64; 6]; 32] = [
    [0.0,  0.0,  1.0,  0.0,  6_288_774.0, -20_905_355.0],
    [2.0,  0.0, -1.0,  0.0,  1_274_027.0,  -3_699_111.0],
    [2.0,  0.0,  0.0,  0.0,    658_314.0,  -2_955_968.0],
    [0.0,  0.0,  2.0,  0.0,    213_618.0,    -569_925.0],
    [0.0,  1.0,  0.0,  0.0,   -185_116.0,      48_888.0],
    [0.0,  0.0,  0.0,  2.0,   -114_332.0,      -3_149.0],
    [2.0,  0.0, -2.0,  0.0,     58_793.0,     246_158.0],
    [2.0, -1.0, -1.0,  0.0,     57_066.0,    -152_138.0],
    [2.0,  0.0,  1.0,  0.0,     53_322.0,    -170_733.0],
    [2.0, -1.0,  0.0,  0.0,     45_758.0,    -204_586.0],
    [0.0,  1.0, -1.0,  0.0,    -40_923.0,    -129_620.0],
    [1.0,  0.0,  0.0,  0.0,    -34_720.0,     108_743.0],
    [0.0,  1.0,  1.0,  0.0,    -30_383.0,     104_755.0],
    [2.0,  0.0,  0.0, -2.0,     15_327.0,      10_321.0],
    [0.0,  0.0,  1.0,  2.0,    -12_528.0,           0.0],
    [0.0,  0.0,  1.0, -2.0,     10_980.0,      79_661.0],
    [4.0,  0.0, -1.0,  0.0,     10_675.0,     -34_782.0],
    [0.0,  0.0,  3.0,  0.0,     10_034.0,     -23_210.0],
    [4.0,  0.0, -2.0,  0.0,      8_548.0,     -21_636.0],
    [2.0,  1.0, -1.0,  0.0,     -7_888.0,      24_208.0],
    [2.0,  1.0,  0.0,  0.0,     -6_766.0,      30_824.0],
    [1.0,  0.0, -1.0,  0.0,     -5_163.0,      -8_379.0],
    [1.0,  1.0,  0.0,  0.0,      4_987.0,     -16_675.0],
    [2.0, -1.0,  1.0,  0.0,      4_036.0,     -12_831.0],
    [2.0,  0.0,  2.0,  0.0,      3_994.0,     -10_445.0],
    [4.0,  0.0,  0.0,  0.0,      3_861.0,     -11_650.0],
    [2.0,  0.0, -3.0,  0.0,      3_665.0,      14_403.0],
    [0.0,  1.0, -2.0,  0.0,     -2_689.0,      -7_003.0],
    [2.0,  0.0, -1.0,  2.0,     -2_602.0,           0.0],
    [2.0, -1.0, -2.0,  0.0,      2_390.0,      10_056.0],
    [1.0,  0.0,  1.0,  0.0,     -2_348.0,       6_322.0],
    [2.0, -2.0,  0.0,  0.0,      2_236.0,      -9_884.0],
];

// Leading terms of Meeus Table 47.B.
// Columns: [D, M, M', F, sigma_b (1e-6 deg)].
#[rustfmt::skip]
static LAT_TERMS: [[f64; 5]; 20] = [
    [0.0,  0.0,  0.0,  1.0,  5_128_122.0],
    [0.0,  0.0,  1.0,  1.0,    280_602.0],
    [0.0,  0.0,  1.0, -1.0,    277_693.0],
    [2.0,  0.0,  0.0, -1.0,    173_237.0],
    [2.0,  0.0, -1.0,  1.0,     55_413.0],
    [2.0,  0.0, -1.0, -1.0,     46_271.0],
    [2.0,  0.0,  0.0,  1.0,     32_573.0],
    [0.0,  0.0,  2.0,  1.0,     17_198.0],
    [2.0,  0.0,  1.0, -1.0,      9_266.0],
    [0.0,  0.0,  2.0, -1.0,      8_822.0],
    [2.0, -1.0,  0.0, -1.0,      8_216.0],
    [2.0,  0.0, -2.0, -1.0,      4_324.0],
    [2.0,  0.0,  1.0,  1.0,      4_200.0],
    [2.0,  1.0,  0.0, -1.0,     -3_359.0],
    [2.0, -1.0, -1.0,  1.0,      2_463.0],
    [2.0, -1.0,  0.0,  1.0,      2_211.0],
    [2.0, -1.0, -1.0, -1.0,      2_065.0],
    [0.0,  1.0, -1.0, -1.0,     -1_870.0],
    [4.0,  0.0, -1.0, -1.0,      1_828.0],
    [0.0,  1.0,  0.0,  1.0,     -1_794.0],
];

/// Eccentricity damping for a term's solar-anomaly multiplier.
fn e_factor(m_coeff: f64, e: f64) -> f64 {
    match m_coeff.abs() as u32 {
        0 => 1.0,
        1 => e,
        _ => e * e,
    }
}

/// Geometric lunar position: `(longitude_deg, latitude_deg, distance_km)`.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn geometric_position(t: f64) -> (f64, f64, f64) {
    let (lp, d, m, mp, f, a1, a2, a3, e) = fundamental_arguments(t);

    let (dr, mr, mpr, fr) = (d.to_radians(), m.to_radians(), mp.to_radians(), f.to_radians());

    let mut sigma_l = 0.0_f64;
    let mut sigma_r = 0.0_f64;
    for term in &LON_DIST_TERMS {
        let arg = term[0] * dr + term[1] * mr + term[2] * mpr + term[3] * fr;
        let damp = e_factor(term[1], e);
        sigma_l += term[4] * damp * arg.sin();
        sigma_r += term[5] * damp * arg.cos();
    }

    let mut sigma_b = 0.0_f64;
    for term in &LAT_TERMS {
        let arg = term[0] * dr + term[1] * mr + term[2] * mpr + term[3] * fr;
        sigma_b += term[4] * e_factor(term[1], e) * arg.sin();
    }

    // Additive terms: Venus (A1), Jupiter (A2), flattening (L' - F)
    let (a1r, a2r, a3r) = (a1.to_radians(), a2.to_radians(), a3.to_radians());
    let lpr = lp.to_radians();
    sigma_l += 3958.0 * a1r.sin() + 1962.0 * (lpr - fr).sin() + 318.0 * a2r.sin();
    sigma_b += -2235.0 * lpr.sin()
        + 382.0 * a3r.sin()
        + 175.0 * (a1r - fr).sin()
        + 175.0 * (a1r + fr).sin()
        + 127.0 * (lpr - mpr).sin()
        - 115.0 * (lpr + mpr).sin();

    let longitude = normalize_deg(lp + sigma_l * 1e-6);
    let latitude = sigma_b * 1e-6;
    let distance = MEAN_DISTANCE_KM + sigma_r * 1e-3;

    (longitude, latitude, distance)
}

/// Apparent lunar position: geometric longitude plus nutation.
pub fn apparent_position(t: f64) -> (f64, f64, f64) {
    let (lon, lat, dist) = geometric_position(t);
    (normalize_deg(lon + nutation_in_longitude_deg(t)), lat, dist)
}
