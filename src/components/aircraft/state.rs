use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{Attitude, ControlSurfaces, SpatialComponent};

/// Represents the overall state of the simulated aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AircraftState {
    /// Spatial data such as position, orientation, and velocity.
    pub spatial: SpatialComponent,
    /// Control surface positions applied on the last tick, always within limits.
    pub controls: ControlSurfaces,
}

impl AircraftState {
    pub fn new(spatial: SpatialComponent) -> Self {
        Self {
            spatial,
            controls: ControlSurfaces::default(),
        }
    }

    /// Stationary aircraft at `position` pointing along `heading`.
    pub fn parked(position: Vector3<f64>, heading: f64) -> Self {
        Self::new(SpatialComponent {
            position,
            attitude: Attitude::level(heading),
            ..Default::default()
        })
    }

    pub fn position(&self) -> &Vector3<f64> {
        &self.spatial.position
    }

    pub fn velocity(&self) -> &Vector3<f64> {
        &self.spatial.velocity
    }

    pub fn attitude(&self) -> &Attitude {
        &self.spatial.attitude
    }

    pub fn is_finite(&self) -> bool {
        self.spatial.is_finite()
    }
}
