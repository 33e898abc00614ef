//! Geocentric planetary positions from mean Keplerian elements.
//!
//! Elements and rates are the Standish (JPL) approximations valid for
//! 1800-2050. Heliocentric rectangular coordinates for the planet and
//! the Earth-Moon barycenter are differenced to geocentric ecliptic
//! longitude, latitude, and distance. Accuracy is a few arcminutes for
//! the inner planets and better than a tenth of a degree for the rest,
//! which holds through the valid range.

use selene_ephem::Body;

use crate::nutation::nutation_in_longitude_deg;

// Standish mean elements at J2000 with per-century rates, 1800-2050 fit.
// Columns: [a (au), a_dot, e, e_dot, I (deg), I_dot,
//           L (deg), L_dot, long.peri (deg), peri_dot, long.node (deg), node_dot].
// Row order matches PLANET_ROWS below.
#[rustfmt::skip]
static ELEMENTS: [[f64; 12]; 9] = [
    // Mercury
    [  0.38709927,  0.00000037, 0.20563593,  0.00001906,  7.00497902, -0.00594749,
     252.25032350, 149_472.67411175,  77.45779628,  0.16047689,  48.33076593, -0.12534081],
    // Venus
    [  0.72333566,  0.00000390, 0.00677672, -0.00004107,  3.39467605, -0.00078890,
     181.97909950,  58_517.81538729, 131.60246718,  0.00268329,  76.67984255, -0.27769418],
    // Earth-Moon barycenter
    [  1.00000261,  0.00000562, 0.01671123, -0.00004392, -0.00001531, -0.01294668,
     100.46457166,  35_999.37244981, 102.93768193,  0.32327364,   0.0,         0.0],
    // Mars
    [  1.52371034,  0.00001847, 0.09339410,  0.00007882,  1.84969142, -0.00813131,
      -4.55343205,  19_140.30268499, -23.94362959,  0.44441088,  49.55953891, -0.29257343],
    // Jupiter
    [  5.20288700, -0.00011607, 0.04838624, -0.00013253,  1.30439695, -0.00183714,
      34.39644051,   3_034.74612775,  14.72847983,  0.21252668, 100.47390909,  0.20469106],
    // Saturn
    [  9.53667594, -0.00125060, 0.05386179, -0.00050991,  2.48599187,  0.00193609,
      49.95424423,   1_222.49362201,  92.59887831, -0.41897216, 113.66242448, -0.28867794],
    // Uranus
    [ 19.18916464, -0.00196176, 0.04725744, -0.00004397,  0.77263783, -0.00242939,
     313.23810451,     428.48202785, 170.95427630,  0.40805281,  74.01692503,  0.04240589],
    // Neptune
    [ 30.06992276,  0.00026291, 0.00859048,  0.00005105,  1.77004347,  0.00035372,
     -55.12002969,     218.45945325,  44.96476227, -0.32241464, 131.78422574, -0.00508664],
    // Pluto
    [ 39.48211675, -0.00031596, 0.24882730,  0.00005170, 17.14001206,  0.00004818,
     238.92903833,     145.20780515, 224.06891629, -0.04062942, 110.30393684, -0.01183482],
];

const EMB_ROW: usize = 2;

/// Row index into `ELEMENTS` for a planetary body, `None` for Sun/Moon.
pub(crate) fn planet_row(body: Body) -> Option<usize> {
    match body {
        Body::Mercury => Some(0),
        Body::Venus => Some(1),
        Body::Mars => Some(3),
        Body::Jupiter => Some(4),
        Body::Saturn => Some(5),
        Body::Uranus => Some(6),
        Body::Neptune => Some(7),
        Body::Pluto => Some(8),
        Body::Sun | Body::Moon => None,
    }
}

fn normalize_deg(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Solves Kepler's equation E - e sin E = M by Newton iteration.
///
/// `m` in radians; converges in a handful of steps for every bound
/// orbit in the table (Pluto's e = 0.249 is the worst case).
fn solve_kepler(m: f64, ecc: f64) -> f64 {
    let mut e = if ecc < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..20 {
        let delta = (e - ecc * e.sin() - m) / (1.0 - ecc * e.cos());
        e -= delta;
        if delta.abs() < 1e-9 {
            break;
        }
    }
    e
}

/// Heliocentric ecliptic rectangular coordinates (au) at `t` centuries TT.
fn heliocentric_xyz(row: usize, t: f64) -> (f64, f64, f64) {
    let el = &ELEMENTS[row];
    let a = el[0] + el[1] * t;
    let ecc = el[2] + el[3] * t;
    let incl = (el[4] + el[5] * t).to_radians();
    let mean_lon = el[6] + el[7] * t;
    let peri_lon = el[8] + el[9] * t;
    let node_lon = el[10] + el[11] * t;

    let omega = (peri_lon - node_lon).to_radians();
    let node = node_lon.to_radians();
    let mean_anom = normalize_deg(mean_lon - peri_lon).to_radians();

    let ecc_anom = solve_kepler(mean_anom, ecc);

    // Orbital-plane coordinates with x' toward perihelion.
    let xp = a * (ecc_anom.cos() - ecc);
    let yp = a * (1.0 - ecc * ecc).sqrt() * ecc_anom.sin();

    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    let x = (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp;
    let y = (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp;
    let z = (so * si) * xp + (co * si) * yp;

    (x, y, z)
}

/// Geometric geocentric position: `(longitude_deg, latitude_deg, distance_au)`.
pub fn geometric_position(row: usize, t: f64) -> (f64, f64, f64) {
    let (px, py, pz) = heliocentric_xyz(row, t);
    let (ex, ey, ez) = heliocentric_xyz(EMB_ROW, t);

    let (gx, gy, gz) = (px - ex, py - ey, pz - ez);
    let dist = (gx * gx + gy * gy + gz * gz).sqrt();
    let lon = normalize_deg(gy.atan2(gx).to_degrees());
    let lat = gz.atan2(gx.hypot(gy)).to_degrees();

    (lon, lat, dist)
}

/// Apparent geocentric position: geometric longitude plus nutation.
pub fn apparent_position(row: usize, t: f64) -> (f64, f64, f64) {
    let (lon, lat, dist) = geometric_position(row, t);
    (normalize_deg(lon + nutation_in_longitude_deg(t)), lat, dist)
}
