use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::ConfigError;

/// Where terrain elevation samples come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TerrainSource {
    /// Uniform elevation everywhere.
    Flat { elevation: f64 },
    /// Octave OpenSimplex noise.
    Procedural {
        seed: u32,
        /// Samples along each axis.
        resolution: usize,
        /// Elevation at zero noise (m).
        base_height: f64,
        /// Elevation swing at full noise (m).
        amplitude: f64,
        /// Horizontal feature size (m).
        scale: f64,
        octaves: u32,
        persistence: f64,
        lacunarity: f64,
    },
    /// 16-bit greyscale heightmap plus JSON metadata holding the height range.
    Heightmap { image: PathBuf, metadata: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Distance from the world origin to each edge of the field (m).
    pub half_extent: f64,
    /// Sea level (m MSL). Heightmap metadata overrides this.
    pub sea_level: f64,
    pub source: TerrainSource,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            half_extent: 100_000.0,
            sea_level: 0.0,
            source: TerrainSource::Procedural {
                seed: 42,
                resolution: 513,
                base_height: 120.0,
                amplitude: 600.0,
                scale: 20_000.0,
                octaves: 5,
                persistence: 0.5,
                lacunarity: 2.0,
            },
        }
    }
}

impl TerrainConfig {
    pub fn flat(elevation: f64) -> Self {
        Self {
            source: TerrainSource::Flat { elevation },
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.half_extent.is_finite() && self.half_extent > 0.0) {
            return Err(ConfigError::invalid("terrain.half_extent", "must be positive"));
        }
        if !self.sea_level.is_finite() {
            return Err(ConfigError::invalid("terrain.sea_level", "must be finite"));
        }
        match &self.source {
            TerrainSource::Flat { elevation } if !elevation.is_finite() => Err(
                ConfigError::invalid("terrain.source.elevation", "must be finite"),
            ),
            TerrainSource::Procedural {
                resolution,
                scale,
                octaves,
                ..
            } => {
                if *resolution < 2 {
                    return Err(ConfigError::invalid(
                        "terrain.source.resolution",
                        "must be at least 2",
                    ));
                }
                if !(*scale > 0.0) || *octaves == 0 {
                    return Err(ConfigError::invalid(
                        "terrain.source.scale",
                        "scale must be positive with at least one octave",
                    ));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
