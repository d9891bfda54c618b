use noise::{NoiseFn, OpenSimplex};

use super::TerrainHeightField;

/// Ground texture bands for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceBand {
    Water,
    Sand,
    Grass,
    Rock,
    Snow,
}

/// Noise-warped height used only to pick texture bands.
///
/// The physics core reads [`TerrainHeightField::elevation_at`] directly and
/// never sees this warp.
pub struct TextureNoise {
    multiplicative: OpenSimplex,
    additive: OpenSimplex,
    /// Relative height warp at full noise.
    pub multiplicative_strength: f64,
    /// Absolute height warp at full noise (m).
    pub additive_strength: f64,
    /// Horizontal feature size (m).
    pub scale: f64,
}

impl TextureNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            multiplicative: OpenSimplex::new(seed),
            additive: OpenSimplex::new(seed.wrapping_add(1)),
            multiplicative_strength: 0.1,
            additive_strength: 15.0,
            scale: 400.0,
        }
    }

    pub fn blend_height(&self, field: &TerrainHeightField, x: f64, z: f64) -> f64 {
        let point = [x / self.scale, z / self.scale];
        let elevation = field.elevation_at(x, z);
        elevation * (1.0 + self.multiplicative_strength * self.multiplicative.get(point))
            + self.additive_strength * self.additive.get(point)
    }

    pub fn band_at(&self, field: &TerrainHeightField, x: f64, z: f64) -> SurfaceBand {
        if field.is_water(x, z) {
            return SurfaceBand::Water;
        }
        let height = self.blend_height(field, x, z) - field.sea_level();
        match height {
            h if h < 10.0 => SurfaceBand::Sand,
            h if h < 600.0 => SurfaceBand::Grass,
            h if h < 1500.0 => SurfaceBand::Rock,
            _ => SurfaceBand::Snow,
        }
    }
}
