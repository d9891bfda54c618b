use serde::{Deserialize, Serialize};

use crate::utils::ConfigError;

/// Touchdown grading and ground roll parameters. Severities are in
/// m/s-equivalents of sink rate, angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundConfig {
    /// Severity below which a touchdown is a normal landing.
    pub soft_landing_threshold: f64,
    /// Severity at or above which the aircraft is destroyed outright.
    pub destruction_threshold: f64,
    /// Ground speed above which horizontal speed adds to severity (m/s).
    pub safe_touchdown_speed: f64,
    /// Severity per m/s above the safe touchdown speed.
    pub horizontal_severity_factor: f64,
    /// Severity per degree of bank at touchdown.
    pub roll_severity_factor: f64,
    /// Severity per degree of nose-down pitch at touchdown.
    pub pitch_severity_factor: f64,
    /// Severity per degree between heading and ground track.
    pub crab_severity_factor: f64,
    /// Severity added when touching down off a runway.
    pub off_runway_penalty: f64,
    /// Severity added when touching down on water.
    pub water_penalty: f64,
    /// Rolling friction coefficient.
    pub rolling_friction: f64,
    /// Braking friction coefficient.
    pub brake_friction: f64,
    /// Largest nose-up pitch while the wheels are on the ground (deg).
    pub max_ground_pitch: f64,
    /// Scale on control authority while on the ground.
    pub ground_control_factor: f64,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            soft_landing_threshold: 2.0,
            destruction_threshold: 6.0,
            safe_touchdown_speed: 45.0,
            horizontal_severity_factor: 0.05,
            roll_severity_factor: 0.1,
            pitch_severity_factor: 0.1,
            crab_severity_factor: 0.05,
            off_runway_penalty: 0.5,
            water_penalty: 6.0,
            rolling_friction: 0.02,
            brake_friction: 0.5,
            max_ground_pitch: 15.0,
            ground_control_factor: 0.2,
        }
    }
}

impl GroundConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.soft_landing_threshold > 0.0) {
            return Err(ConfigError::invalid(
                "ground.soft_landing_threshold",
                "must be positive",
            ));
        }
        if !(self.destruction_threshold > self.soft_landing_threshold) {
            return Err(ConfigError::invalid(
                "ground.destruction_threshold",
                format!(
                    "{} must exceed the soft landing threshold {}",
                    self.destruction_threshold, self.soft_landing_threshold
                ),
            ));
        }
        if !(self.rolling_friction >= 0.0 && self.brake_friction >= self.rolling_friction) {
            return Err(ConfigError::invalid(
                "ground.brake_friction",
                "friction must be non-negative and braking at least rolling friction",
            ));
        }
        if !(0.0..90.0).contains(&self.max_ground_pitch) {
            return Err(ConfigError::invalid(
                "ground.max_ground_pitch",
                "must be within [0, 90) degrees",
            ));
        }
        Ok(())
    }
}
