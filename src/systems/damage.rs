use bevy::prelude::*;

use crate::components::{DamageSignal, DamageState};
use crate::resources::{DamageConfig, GroundConfig};

/// Converts overspeed exposure and impact severity into integrity loss.
#[derive(Debug, Clone)]
pub struct DamageModel {
    config: DamageConfig,
    soft_landing_threshold: f64,
    destruction_threshold: f64,
}

impl DamageModel {
    pub fn new(config: DamageConfig, ground: &GroundConfig) -> Self {
        Self {
            config,
            soft_landing_threshold: ground.soft_landing_threshold,
            destruction_threshold: ground.destruction_threshold,
        }
    }

    /// Continuous overspeed damage, `rate * severity * dt`.
    pub fn apply_overspeed(&self, damage: &mut DamageState, severity: f64, dt: f64) -> DamageSignal {
        if !(severity > 0.0 && dt > 0.0) {
            return DamageSignal::None;
        }
        damage.reduce(self.config.overspeed_damage_rate * severity * dt)
    }

    /// One-off impact damage for a single contact event.
    pub fn apply_impact(&self, damage: &mut DamageState, severity: f64) -> DamageSignal {
        if severity >= self.destruction_threshold {
            debug!("Impact severity {severity:.2} exceeds destruction threshold");
            return damage.destroy();
        }
        if severity <= self.soft_landing_threshold {
            return DamageSignal::None;
        }
        damage.reduce(self.config.impact_damage_factor * (severity - self.soft_landing_threshold))
    }
}
