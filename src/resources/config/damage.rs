use serde::{Deserialize, Serialize};

use crate::utils::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageConfig {
    /// Integrity lost per second per unit of overspeed severity.
    pub overspeed_damage_rate: f64,
    /// Integrity lost per unit of impact severity above the soft threshold.
    pub impact_damage_factor: f64,
}

impl Default for DamageConfig {
    fn default() -> Self {
        Self {
            overspeed_damage_rate: 50.0,
            impact_damage_factor: 25.0,
        }
    }
}

impl DamageConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.overspeed_damage_rate.is_finite() && self.overspeed_damage_rate >= 0.0) {
            return Err(ConfigError::invalid(
                "damage.overspeed_damage_rate",
                "must be non-negative",
            ));
        }
        if !(self.impact_damage_factor.is_finite() && self.impact_damage_factor >= 0.0) {
            return Err(ConfigError::invalid(
                "damage.impact_damage_factor",
                "must be non-negative",
            ));
        }
        Ok(())
    }
}
