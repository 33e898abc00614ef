//! The five major aspects and separation classification.

use crate::angles::separation;

/// The five major (Ptolemaic) aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// All five aspects in increasing angle order.
pub const ALL_ASPECTS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

impl AspectKind {
    /// Exact angle of the aspect in degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    /// Lowercase name of the aspect.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Opposition => "opposition",
        }
    }

    /// All five aspects in order.
    pub const fn all() -> &'static [AspectKind; 5] {
        &ALL_ASPECTS
    }

    /// The aspect whose exact angle lies within `orb_deg` of the given
    /// shorter-arc separation, if any.
    ///
    /// Adjacent aspect angles are at least 30 degrees apart, so for any
    /// orb below 15 degrees at most one aspect can match.
    pub fn matching(separation_deg: f64, orb_deg: f64) -> Option<AspectKind> {
        ALL_ASPECTS
            .into_iter()
            .find(|a| (separation_deg - a.angle_deg()).abs() <= orb_deg)
    }
}

/// Residual of two longitudes against an aspect angle: how far the
/// shorter-arc separation is from exact, in degrees (>= 0).
pub fn aspect_residual(lon_a: f64, lon_b: f64, aspect: AspectKind) -> f64 {
    (separation(lon_a, lon_b) - aspect.angle_deg()).abs()
}
