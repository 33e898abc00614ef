//! Types for lunar phase computation and phase-event search.

use selene_time::Instant;
use selene_zodiac::PhaseBucket;

/// The Moon's phase at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhase {
    /// Which of the eight 45-degree buckets the elongation falls in.
    pub bucket: PhaseBucket,
    /// Sun→Moon elongation in degrees [0, 360).
    pub angle_deg: f64,
    /// Illuminated fraction of the disc, percent [0, 100].
    pub illumination_percent: f64,
}

/// The two exact phase events the search engine locates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseEventKind {
    /// Elongation 0°: Sun and Moon conjunct.
    NewMoon,
    /// Elongation 180°: Sun and Moon opposed.
    FullMoon,
}

impl PhaseEventKind {
    /// Elongation angle at which the event is exact, in degrees.
    pub const fn target_angle_deg(self) -> f64 {
        match self {
            Self::NewMoon => 0.0,
            Self::FullMoon => 180.0,
        }
    }

    /// Lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "new moon",
            Self::FullMoon => "full moon",
        }
    }
}

/// An exact new or full moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseEvent {
    /// Which lunation point.
    pub kind: PhaseEventKind,
    /// When the elongation is exactly at the target angle.
    pub time: Instant,
}

/// Configuration for the phase-event search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSearchConfig {
    /// Coarse scan step in hours (default 6; elongation moves ~12.2
    /// deg/day, ~3 degrees per step).
    pub step_hours: f64,
    /// Scan bound in days (default 40, comfortably over one synodic
    /// month of ~29.53 days).
    pub max_scan_days: f64,
    /// Bisection convergence threshold in minutes (default 1).
    pub convergence_minutes: f64,
    /// Maximum bisection iterations (default 50).
    pub max_iterations: u32,
}

impl Default for PhaseSearchConfig {
    fn default() -> Self {
        Self { step_hours: 6.0, max_scan_days: 40.0, convergence_minutes: 1.0, max_iterations: 50 }
    }
}

impl PhaseSearchConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.step_hours.is_finite() || self.step_hours <= 0.0 {
            return Err("step_hours must be positive");
        }
        if !self.max_scan_days.is_finite() || self.max_scan_days <= 0.0 {
            return Err("max_scan_days must be positive");
        }
        if !self.convergence_minutes.is_finite() || self.convergence_minutes <= 0.0 {
            return Err("convergence_minutes must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        Ok(())
    }
}
