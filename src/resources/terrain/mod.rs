mod generator;
mod height_field;
mod heightmap;
mod texture;

pub use generator::{NoiseGenerator, NoiseParams};
pub use height_field::TerrainHeightField;
pub use heightmap::{height_field_from_luma16, load_heightmap, HeightRange, HeightmapMetadata};
pub use texture::{SurfaceBand, TextureNoise};

use crate::resources::config::{TerrainConfig, TerrainSource};
use crate::utils::TerrainError;

/// Build the height field described by `config`.
pub fn build_height_field(config: &TerrainConfig) -> Result<TerrainHeightField, TerrainError> {
    match &config.source {
        TerrainSource::Flat { elevation } => {
            TerrainHeightField::flat(*elevation, config.half_extent, config.sea_level)
        }
        TerrainSource::Procedural {
            seed,
            resolution,
            base_height,
            amplitude,
            scale,
            octaves,
            persistence,
            lacunarity,
        } => NoiseGenerator::new(*seed).height_field(
            *resolution,
            config.half_extent,
            config.sea_level,
            *base_height,
            *amplitude,
            &NoiseParams {
                scale: *scale,
                octaves: *octaves,
                persistence: *persistence,
                lacunarity: *lacunarity,
            },
        ),
        TerrainSource::Heightmap { image, metadata } => {
            load_heightmap(image, metadata, config.half_extent)
        }
    }
}
