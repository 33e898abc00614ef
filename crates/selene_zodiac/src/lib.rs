//! Pure angular classification for the lunar event engine.
//!
//! This crate provides:
//! - Circular-angle normalization and separation helpers
//! - Zodiac sign mapping (12 equal 30-degree buckets, Aries at 0)
//! - The five major aspects and orb matching
//! - Lunar phase buckets and illumination from elongation
//!
//! Everything here is a total function of angles; no ephemeris access.

pub mod angles;
pub mod aspect;
pub mod phase;
pub mod sign;

pub use angles::{normalize_360, normalize_pm180, separation, signed_offset};
pub use aspect::{ALL_ASPECTS, AspectKind, aspect_residual};
pub use phase::{ALL_PHASES, PhaseBucket, illumination_percent};
pub use sign::{ALL_SIGNS, Dms, SignPosition, ZodiacSign, deg_to_dms, sign_from_longitude};
