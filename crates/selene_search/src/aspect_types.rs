//! Types for the aspect search engine.

use selene_ephem::Body;
use selene_time::Instant;
use selene_zodiac::AspectKind;

/// Configuration for the upcoming-aspect search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectSearchConfig {
    /// Orb tolerance in degrees: how close a separation must be to an
    /// aspect angle to count as "forming" (default 1.0).
    pub orb_deg: f64,
    /// Coarse scan step in minutes (default 15).
    pub step_minutes: f64,
    /// How far past the start the coarse scan looks, in hours (default 24).
    pub horizon_hours: f64,
    /// Bisection convergence threshold in minutes (default 1).
    pub convergence_minutes: f64,
    /// Maximum bisection iterations (default 50).
    pub max_iterations: u32,
    /// Residual below which a non-crossing pass still counts as exact,
    /// in degrees (default 0.01).
    pub epsilon_deg: f64,
}

impl Default for AspectSearchConfig {
    fn default() -> Self {
        Self {
            orb_deg: 1.0,
            step_minutes: 15.0,
            horizon_hours: 24.0,
            convergence_minutes: 1.0,
            max_iterations: 50,
            epsilon_deg: 0.01,
        }
    }
}

impl AspectSearchConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.orb_deg.is_finite() || self.orb_deg <= 0.0 {
            return Err("orb_deg must be positive");
        }
        // Adjacent aspect angles are 30 degrees apart (60/90/120); an orb
        // of 15 or more would let one separation match two aspects.
        if self.orb_deg >= 15.0 {
            return Err("orb_deg must be below 15");
        }
        if !self.step_minutes.is_finite() || self.step_minutes <= 0.0 {
            return Err("step_minutes must be positive");
        }
        if !self.horizon_hours.is_finite() || self.horizon_hours <= 0.0 {
            return Err("horizon_hours must be positive");
        }
        if !self.convergence_minutes.is_finite() || self.convergence_minutes <= 0.0 {
            return Err("convergence_minutes must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.epsilon_deg.is_finite() || self.epsilon_deg < 0.0 {
            return Err("epsilon_deg must be non-negative");
        }
        Ok(())
    }
}

/// An exact (or grazing) aspect between the reference body and another body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectEvent {
    /// The other body involved in the aspect.
    pub body: Body,
    /// Which of the five major aspects.
    pub aspect: AspectKind,
    /// Shorter-arc angular separation at the event, in degrees [0, 180].
    pub exact_angle_deg: f64,
    /// When the aspect is exact.
    pub exact_time: Instant,
    /// Achieved residual from the nominal aspect angle, in degrees (>= 0).
    pub orb_deg: f64,
}
