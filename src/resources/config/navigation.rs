use serde::{Deserialize, Serialize};

use crate::utils::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Distance under which the destination counts as near (m).
    pub proximity_radius: f64,
    /// Target approach path angle (deg).
    pub glideslope_angle: f64,
    /// Ground speed below which no ETA is reported (m/s).
    pub min_eta_ground_speed: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            proximity_radius: 5000.0,
            glideslope_angle: 3.0,
            min_eta_ground_speed: 0.5,
        }
    }
}

impl NavigationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.proximity_radius > 0.0) {
            return Err(ConfigError::invalid(
                "navigation.proximity_radius",
                "must be positive",
            ));
        }
        if !(self.glideslope_angle > 0.0 && self.glideslope_angle < 45.0) {
            return Err(ConfigError::invalid(
                "navigation.glideslope_angle",
                "must be within (0, 45) degrees",
            ));
        }
        if !(self.min_eta_ground_speed > 0.0) {
            return Err(ConfigError::invalid(
                "navigation.min_eta_ground_speed",
                "must be positive",
            ));
        }
        Ok(())
    }
}
