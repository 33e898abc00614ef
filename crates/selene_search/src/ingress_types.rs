//! Types for the sign-ingress search engine.

use selene_time::Instant;
use selene_zodiac::ZodiacSign;

/// Configuration for the ingress bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngressSearchConfig {
    /// Bisection horizon in days (default 3; the Moon never spends more
    /// than ~2.6 days within one sign, slower bodies need more).
    pub horizon_days: f64,
    /// Convergence threshold in minutes (default 1).
    pub convergence_minutes: f64,
    /// Maximum bisection iterations (default 64).
    pub max_iterations: u32,
}

impl Default for IngressSearchConfig {
    fn default() -> Self {
        Self { horizon_days: 3.0, convergence_minutes: 1.0, max_iterations: 64 }
    }
}

impl IngressSearchConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.horizon_days.is_finite() || self.horizon_days <= 0.0 {
            return Err("horizon_days must be positive");
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

/// A sign-boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngressEvent {
    /// Sign the body leaves.
    pub from_sign: ZodiacSign,
    /// Sign the body enters; always the successor of `from_sign` in the
    /// 12-sign cycle.
    pub to_sign: ZodiacSign,
    /// Crossing instant: the upper bound of the converged bisection
    /// interval, so the body has entered `to_sign` at this time.
    pub time: Instant,
    /// The boundary longitude crossed, in degrees (diagnostic).
    pub longitude_deg: f64,
}
