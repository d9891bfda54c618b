use serde::{Deserialize, Serialize};

use crate::utils::{
    ConfigError, DEFAULT_MAX_SUBSTEPS, DEFAULT_TIMESTEP, GRAVITY, MIN_AIRSPEED_THRESHOLD,
    SEA_LEVEL_AIR_DENSITY,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Fixed integration step (s).
    pub timestep: f64,
    /// Most fixed steps run for one frame before the backlog is dropped.
    pub max_substeps: u32,
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
    /// Constant air density (kg/m³).
    pub air_density: f64,
    /// Velocity magnitude limit (m/s).
    pub max_velocity: f64,
    /// Airspeed below which aerodynamics are switched off (m/s).
    pub min_airspeed: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            max_substeps: DEFAULT_MAX_SUBSTEPS,
            gravity: GRAVITY,
            air_density: SEA_LEVEL_AIR_DENSITY,
            max_velocity: 1000.0,
            min_airspeed: MIN_AIRSPEED_THRESHOLD,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(ConfigError::invalid("physics.timestep", "must be positive"));
        }
        if self.max_substeps == 0 {
            return Err(ConfigError::invalid("physics.max_substeps", "must be at least 1"));
        }
        for (field, value) in [
            ("physics.gravity", self.gravity),
            ("physics.air_density", self.air_density),
            ("physics.max_velocity", self.max_velocity),
            ("physics.min_airspeed", self.min_airspeed),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(field, format!("{value} must be positive")));
            }
        }
        Ok(())
    }
}
