use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{DamageConfig, GroundConfig, NavigationConfig, PhysicsConfig, TerrainConfig};
use crate::components::AircraftConfig;
use crate::utils::ConfigError;

#[derive(Resource, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub aircraft: AircraftConfig,
    pub ground: GroundConfig,
    pub damage: DamageConfig,
    pub navigation: NavigationConfig,
    pub terrain: TerrainConfig,
    /// Runway and restricted zone table (JSON).
    #[serde(default)]
    pub world_data: Option<PathBuf>,
}

impl SimulationConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path.as_ref())?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        info!("Loaded simulation config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        self.aircraft.validate()?;
        self.ground.validate()?;
        self.damage.validate()?;
        self.navigation.validate()?;
        self.terrain.validate()?;
        Ok(())
    }
}
