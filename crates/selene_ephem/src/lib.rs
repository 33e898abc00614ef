//! The ephemeris oracle contract.
//!
//! The engine never computes positions itself; it depends on an injected
//! implementation of the [`Ephemeris`] trait. A provider answers one
//! question only: where is a body, in geocentric ecliptic coordinates,
//! at a given instant. Keeping the oracle behind a trait (instead of a
//! process-wide handle) lets tests substitute synthetic motion and lets
//! batch drivers share one provider across worker threads by reference.

use std::error::Error;
use std::fmt::{Display, Formatter};

use selene_time::Instant;

/// The fixed set of bodies the engine tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All ten bodies in conventional order.
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

/// The nine bodies the Moon forms aspects against.
pub const ASPECT_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// English name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// All ten bodies in order.
    pub const fn all() -> &'static [Body; 10] {
        &ALL_BODIES
    }
}

/// Geocentric ecliptic state of one body at one instant.
///
/// `longitude_deg` is always normalized to [0, 360). The speed's sign
/// indicates retrograde motion; neither speed magnitude nor distance is
/// otherwise interpreted by the engine. Distance is in astronomical
/// units for every body (the Moon sits near 0.0026 au).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_au: f64,
    pub speed_deg_per_day: f64,
}

impl BodyPosition {
    /// Build a position, normalizing the longitude into [0, 360).
    pub fn new(
        longitude_deg: f64,
        latitude_deg: f64,
        distance_au: f64,
        speed_deg_per_day: f64,
    ) -> Self {
        Self {
            longitude_deg: longitude_deg.rem_euclid(360.0),
            latitude_deg,
            distance_au,
            speed_deg_per_day,
        }
    }

    /// True when every component is a finite number.
    ///
    /// The engine checks this on every oracle response; a provider that
    /// yields NaN or infinity is reported as an oracle failure, never
    /// silently substituted.
    pub fn is_finite(&self) -> bool {
        self.longitude_deg.is_finite()
            && self.latitude_deg.is_finite()
            && self.distance_au.is_finite()
            && self.speed_deg_per_day.is_finite()
    }
}

/// The oracle contract: geocentric ecliptic position of a body at an
/// instant.
///
/// Implementations must be pure with respect to their inputs: the same
/// `(body, at)` pair always yields the same position. Providers meant
/// for the parallel batch driver additionally need to be `Sync` so a
/// shared reference can cross worker threads.
pub trait Ephemeris {
    fn position(&self, body: Body, at: Instant) -> Result<BodyPosition, EphemerisError>;
}

/// Errors from an ephemeris provider (or from validating its output).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider does not model this body.
    UnsupportedBody(Body),
    /// The requested instant is not a finite Julian date.
    InvalidInstant(f64),
    /// The provider returned non-finite data for this body.
    InvalidData(Body),
    /// Provider-internal failure.
    Provider(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedBody(b) => write!(f, "body not supported by provider: {}", b.name()),
            Self::InvalidInstant(jd) => write!(f, "instant is not a finite Julian date: {jd}"),
            Self::InvalidData(b) => write!(f, "provider returned non-finite data for {}", b.name()),
            Self::Provider(msg) => write!(f, "ephemeris provider error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}
