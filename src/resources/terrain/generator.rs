use bevy::prelude::*;
use noise::{NoiseFn, OpenSimplex};

use super::TerrainHeightField;
use crate::utils::TerrainError;

/// Octave OpenSimplex generator for procedural elevation grids.
pub struct NoiseGenerator {
    noise: OpenSimplex,
    seed: u32,
}

/// Parameters for [`NoiseGenerator::height_field`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParams {
    pub scale: f64,
    pub octaves: u32,
    pub persistence: f64,
    pub lacunarity: f64,
}

impl NoiseGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: OpenSimplex::new(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    // Multiple octaves for more natural terrain, normalised to roughly [-1, 1]
    pub fn get_noise(&self, x: f64, z: f64, params: &NoiseParams) -> f64 {
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut noise_value = 0.0;
        let mut weight = 0.0;

        for _ in 0..params.octaves {
            let sample_x = x * frequency / params.scale;
            let sample_z = z * frequency / params.scale;

            noise_value += self.noise.get([sample_x, sample_z]) * amplitude;

            weight += amplitude;
            amplitude *= params.persistence;
            frequency *= params.lacunarity;
        }

        if weight > 0.0 {
            noise_value / weight
        } else {
            0.0
        }
    }

    /// Sample a `resolution` x `resolution` grid covering ±`half_extent`.
    pub fn height_field(
        &self,
        resolution: usize,
        half_extent: f64,
        sea_level: f64,
        base_height: f64,
        amplitude: f64,
        params: &NoiseParams,
    ) -> Result<TerrainHeightField, TerrainError> {
        if resolution < 2 {
            return Err(TerrainError::GridTooSmall {
                cols: resolution,
                rows: resolution,
            });
        }
        let step = 2.0 * half_extent / (resolution - 1) as f64;
        let mut samples = Vec::with_capacity(resolution * resolution);
        for row in 0..resolution {
            let z = half_extent - row as f64 * step;
            for col in 0..resolution {
                let x = -half_extent + col as f64 * step;
                samples.push(base_height + amplitude * self.get_noise(x, z, params));
            }
        }

        let field = TerrainHeightField::new(resolution, resolution, samples, half_extent, sea_level)?;
        let (lo, hi) = field.elevation_range();
        info!(
            "Generated {}x{} terrain (seed {}), elevation {:.1}..{:.1} m",
            resolution, resolution, self.seed, lo, hi
        );
        Ok(field)
    }
}
