//! Types for the void-of-course Moon deriver.

use selene_ephem::{ASPECT_BODIES, Body};
use selene_time::Instant;
use selene_zodiac::{AspectKind, ZodiacSign};

use crate::aspect_types::AspectSearchConfig;
use crate::ingress_types::IngressSearchConfig;

/// Configuration for void-of-course derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct VoidOfCourseConfig {
    /// Bodies the Moon is checked against for applying aspects
    /// (default: the nine non-Moon bodies).
    pub aspect_bodies: Vec<Body>,
    /// Windows shorter than this many minutes (after rounding) are
    /// suppressed as noise (default 5).
    pub min_duration_minutes: i64,
    /// Settings for the aspect leg of the derivation.
    pub aspect: AspectSearchConfig,
    /// Settings for the ingress leg of the derivation.
    pub ingress: IngressSearchConfig,
}

impl Default for VoidOfCourseConfig {
    fn default() -> Self {
        Self {
            aspect_bodies: ASPECT_BODIES.to_vec(),
            min_duration_minutes: 5,
            aspect: AspectSearchConfig::default(),
            ingress: IngressSearchConfig::default(),
        }
    }
}

impl VoidOfCourseConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.aspect_bodies.is_empty() {
            return Err("aspect_bodies must not be empty");
        }
        if self.aspect_bodies.contains(&Body::Moon) {
            return Err("aspect_bodies must not include the Moon");
        }
        if self.min_duration_minutes < 0 {
            return Err("min_duration_minutes must be non-negative");
        }
        self.aspect.validate()?;
        self.ingress.validate()
    }
}

/// The final applying aspect the Moon perfects before leaving its sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LastAspect {
    /// The other body.
    pub body: Body,
    /// Which aspect was perfected.
    pub aspect: AspectKind,
    /// When it was exact.
    pub time: Instant,
}

/// A void-of-course window: from the Moon's final aspect in a sign (or
/// from the query instant when no aspect remains) until the next ingress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoidPeriod {
    /// Window start.
    pub start: Instant,
    /// Window end; always the ingress instant.
    pub end: Instant,
    /// The aspect that opened the window, or `None` when the Moon was
    /// already void at the query instant.
    pub last_aspect: Option<LastAspect>,
    /// Sign the Moon occupies during the window.
    pub moon_sign: ZodiacSign,
    /// Sign the Moon enters at `end`.
    pub next_sign: ZodiacSign,
    /// Rounded window length in minutes; never below the configured
    /// significance threshold.
    pub duration_minutes: i64,
}
