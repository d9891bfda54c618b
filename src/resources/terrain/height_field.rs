use nalgebra::Vector3;

use crate::utils::TerrainError;

// Half width of the central difference used for slopes
const GRADIENT_STEP: f64 = 0.5; // m

/// Immutable grid of elevation samples covering a square world area.
///
/// Samples are row-major. Column 0 lies on the west edge (x = -half_extent) and
/// row 0 on the north edge (z = +half_extent), matching image layout. Once
/// built the field is never mutated, so it can be shared behind an `Arc` by
/// physics and any number of readers.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainHeightField {
    cols: usize,
    rows: usize,
    samples: Vec<f64>,
    half_extent: f64,
    sea_level: f64,
}

impl TerrainHeightField {
    pub fn new(
        cols: usize,
        rows: usize,
        samples: Vec<f64>,
        half_extent: f64,
        sea_level: f64,
    ) -> Result<Self, TerrainError> {
        if cols < 2 || rows < 2 {
            return Err(TerrainError::GridTooSmall { cols, rows });
        }
        if samples.len() != cols * rows {
            return Err(TerrainError::SampleCount {
                expected: cols * rows,
                actual: samples.len(),
            });
        }
        if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
            return Err(TerrainError::NonFiniteSample { index });
        }
        if !(half_extent.is_finite() && half_extent > 0.0) {
            return Err(TerrainError::InvalidExtent(half_extent));
        }
        if !sea_level.is_finite() {
            return Err(TerrainError::InvalidExtent(sea_level));
        }
        Ok(Self {
            cols,
            rows,
            samples,
            half_extent,
            sea_level,
        })
    }

    /// A 2x2 field with every sample at `elevation`.
    pub fn flat(elevation: f64, half_extent: f64, sea_level: f64) -> Result<Self, TerrainError> {
        Self::new(2, 2, vec![elevation; 4], half_extent, sea_level)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn half_extent(&self) -> f64 {
        self.half_extent
    }

    pub fn sea_level(&self) -> f64 {
        self.sea_level
    }

    pub fn sample(&self, col: usize, row: usize) -> f64 {
        self.samples[row * self.cols + col]
    }

    pub fn in_bounds(&self, x: f64, z: f64) -> bool {
        x.abs() <= self.half_extent && z.abs() <= self.half_extent
    }

    /// Bilinearly interpolated elevation at (x, z). Positions outside the
    /// field, or non-finite ones, read as sea level.
    pub fn elevation_at(&self, x: f64, z: f64) -> f64 {
        if !(x.is_finite() && z.is_finite()) || !self.in_bounds(x, z) {
            return self.sea_level;
        }
        let span = 2.0 * self.half_extent;
        let gx = (x + self.half_extent) / span * (self.cols - 1) as f64;
        let gz = (self.half_extent - z) / span * (self.rows - 1) as f64;

        let col = (gx.floor() as usize).min(self.cols - 2);
        let row = (gz.floor() as usize).min(self.rows - 2);
        let fx = gx - col as f64;
        let fz = gz - row as f64;

        let h00 = self.sample(col, row);
        let h10 = self.sample(col + 1, row);
        let h01 = self.sample(col, row + 1);
        let h11 = self.sample(col + 1, row + 1);

        let top = h00 + (h10 - h00) * fx;
        let bottom = h01 + (h11 - h01) * fx;
        top + (bottom - top) * fz
    }

    /// Surface slope (dh/dx, dh/dz) at (x, z) by central difference.
    ///
    /// Flat outside the field and over water, where the ground is the sea
    /// surface. Sample points are kept inside the field near its edges.
    pub fn gradient_at(&self, x: f64, z: f64) -> (f64, f64) {
        if !(x.is_finite() && z.is_finite()) || !self.in_bounds(x, z) || self.is_water(x, z) {
            return (0.0, 0.0);
        }
        let step = GRADIENT_STEP;
        let (x0, x1) = ((x - step).max(-self.half_extent), (x + step).min(self.half_extent));
        let (z0, z1) = ((z - step).max(-self.half_extent), (z + step).min(self.half_extent));
        let dx = (self.elevation_at(x1, z) - self.elevation_at(x0, z)) / (x1 - x0);
        let dz = (self.elevation_at(x, z1) - self.elevation_at(x, z0)) / (z1 - z0);
        (dx, dz)
    }

    /// Effective ground height: terrain, or sea level over water.
    pub fn ground_height(&self, x: f64, z: f64) -> f64 {
        self.elevation_at(x, z).max(self.sea_level)
    }

    pub fn is_water(&self, x: f64, z: f64) -> bool {
        self.elevation_at(x, z) < self.sea_level
    }

    /// Height above ground level.
    pub fn agl(&self, position: &Vector3<f64>) -> f64 {
        position.y - self.ground_height(position.x, position.z)
    }

    /// Lowest and highest sample.
    pub fn elevation_range(&self) -> (f64, f64) {
        self.samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
                (lo.min(s), hi.max(s))
            })
    }
}
