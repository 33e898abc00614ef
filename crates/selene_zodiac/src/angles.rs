//! Circular-angle helpers shared by every longitude comparison.
//!
//! All sign, aspect, and boundary logic goes through these instead of raw
//! inequalities, so the 360°→0° wrap cannot introduce sign errors.

/// Normalize an angle to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle to (-180, +180].
pub fn normalize_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Signed circular offset from `from_deg` to `to_deg`, in (-180, +180].
///
/// Positive means `to_deg` lies counterclockwise (ahead) of `from_deg`
/// along the shorter arc.
pub fn signed_offset(from_deg: f64, to_deg: f64) -> f64 {
    normalize_pm180(to_deg - from_deg)
}

/// Shorter-arc angular separation between two longitudes, in [0, 180].
pub fn separation(a_deg: f64, b_deg: f64) -> f64 {
    normalize_pm180(a_deg - b_deg).abs()
}
