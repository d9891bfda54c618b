use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::TerrainHeightField;
use crate::utils::{map_range, TerrainError};

/// Height range stored next to a heightmap image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightRange {
    pub min: f64,
    pub max: f64,
    #[serde(rename = "sea_lvl")]
    pub sea_level: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightmapMetadata {
    pub heights: HeightRange,
}

impl HeightmapMetadata {
    pub fn from_json(json: &str) -> Result<Self, TerrainError> {
        let metadata: Self = serde_json::from_str(json)?;
        let HeightRange { min, max, .. } = metadata.heights;
        if !(min.is_finite() && max.is_finite() && max > min) {
            return Err(TerrainError::InvalidHeightRange { min, max });
        }
        Ok(metadata)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TerrainError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Build a height field from raw 16-bit samples, mapping 0..=65535 onto the
/// metadata height range.
pub fn height_field_from_luma16(
    width: usize,
    height: usize,
    pixels: &[u16],
    metadata: &HeightmapMetadata,
    half_extent: f64,
) -> Result<TerrainHeightField, TerrainError> {
    let range = metadata.heights;
    let samples = pixels
        .iter()
        .map(|&p| map_range(p as f64, 0.0, u16::MAX as f64, range.min, range.max))
        .collect();
    TerrainHeightField::new(width, height, samples, half_extent, range.sea_level)
}

/// Load a 16-bit greyscale heightmap image and its JSON metadata.
pub fn load_heightmap(
    image_path: impl AsRef<Path>,
    metadata_path: impl AsRef<Path>,
    half_extent: f64,
) -> Result<TerrainHeightField, TerrainError> {
    let image_path = image_path.as_ref();
    let metadata = HeightmapMetadata::load(metadata_path)?;
    let image = image::open(image_path)
        .map_err(|source| TerrainError::Image {
            path: image_path.to_path_buf(),
            source,
        })?
        .into_luma16();
    let (width, height) = image.dimensions();
    let field = height_field_from_luma16(
        width as usize,
        height as usize,
        image.as_raw(),
        &metadata,
        half_extent,
    )?;
    info!(
        "Loaded {}x{} heightmap from {}",
        width,
        height,
        image_path.display()
    );
    Ok(field)
}
