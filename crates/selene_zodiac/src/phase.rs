//! Lunar phase buckets and illumination from Sun-Moon elongation.
//!
//! The phase angle is the Moon's ecliptic longitude minus the Sun's,
//! normalized to [0, 360): 0 = new, 90 = first quarter, 180 = full,
//! 270 = last quarter. Buckets are the eight equal 45-degree slices
//! with boundaries at 0, 45, 90, ..., 315, wrapping back to new at 360.

use crate::angles::normalize_360;

/// The eight phase buckets in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseBucket {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All eight buckets in cycle order (0 = New).
pub const ALL_PHASES: [PhaseBucket; 8] = [
    PhaseBucket::New,
    PhaseBucket::WaxingCrescent,
    PhaseBucket::FirstQuarter,
    PhaseBucket::WaxingGibbous,
    PhaseBucket::Full,
    PhaseBucket::WaningGibbous,
    PhaseBucket::LastQuarter,
    PhaseBucket::WaningCrescent,
];

impl PhaseBucket {
    /// Snake-case name used in persisted rows and display.
    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::WaxingCrescent => "waxing_crescent",
            Self::FirstQuarter => "first_quarter",
            Self::WaxingGibbous => "waxing_gibbous",
            Self::Full => "full",
            Self::WaningGibbous => "waning_gibbous",
            Self::LastQuarter => "last_quarter",
            Self::WaningCrescent => "waning_crescent",
        }
    }

    /// 0-based index in cycle order (New=0 .. WaningCrescent=7).
    pub const fn index(self) -> u8 {
        match self {
            Self::New => 0,
            Self::WaxingCrescent => 1,
            Self::FirstQuarter => 2,
            Self::WaxingGibbous => 3,
            Self::Full => 4,
            Self::WaningGibbous => 5,
            Self::LastQuarter => 6,
            Self::WaningCrescent => 7,
        }
    }

    /// Classify a phase angle into its bucket.
    ///
    /// Buckets are [0,45) new, [45,90) waxing crescent, ... [315,360)
    /// waning crescent; 360 itself folds back to new.
    pub fn from_angle(angle_deg: f64) -> PhaseBucket {
        let a = normalize_360(angle_deg);
        let idx = (a / 45.0).floor() as usize % 8;
        ALL_PHASES[idx]
    }
}

/// Illuminated fraction of the lunar disc as a percentage, from the
/// phase angle: `(1 - cos(angle)) / 2 * 100`.
pub fn illumination_percent(angle_deg: f64) -> f64 {
    (1.0 - angle_deg.to_radians().cos()) / 2.0 * 100.0
}
