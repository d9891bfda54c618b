use serde::{Deserialize, Serialize};

/// Configuration for the geometry of an aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftGeometry {
    /// The total wing area of the aircraft (m²).
    pub wing_area: f64,
    /// The wingspan of the aircraft (m).
    pub wing_span: f64,
    /// Wing aspect ratio used for induced drag.
    pub aspect_ratio: f64,
    /// Oswald span efficiency factor.
    pub oswald_efficiency: f64,
}

impl AircraftGeometry {
    /// Creates a new `AircraftGeometry` instance with the specified parameters.
    ///
    /// # Arguments
    /// * `wing_area` - The total wing area of the aircraft (m²).
    /// * `wing_span` - The wing span of the aircraft (m).
    /// * `aspect_ratio` - Wing aspect ratio.
    /// * `oswald_efficiency` - Span efficiency factor in (0, 1].
    pub fn new(wing_area: f64, wing_span: f64, aspect_ratio: f64, oswald_efficiency: f64) -> Self {
        AircraftGeometry {
            wing_area,
            wing_span,
            aspect_ratio,
            oswald_efficiency,
        }
    }

    pub fn cessna_172() -> Self {
        Self::new(16.2, 11.0, 7.5, 0.8)
    }

    /// Denominator of the induced drag term, π·AR·e.
    pub fn induced_drag_factor(&self) -> f64 {
        std::f64::consts::PI * self.aspect_ratio * self.oswald_efficiency
    }
}
