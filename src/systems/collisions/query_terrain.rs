use serde::{Deserialize, Serialize};

use crate::resources::{TerrainHeightField, WaypointTable};

/// What the wheels would touch at a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceType {
    Runway,
    Terrain,
    Water,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroundSample {
    /// Effective ground height (m MSL).
    pub height: f64,
    pub surface: SurfaceType,
    /// Surface slope (dh/dx, dh/dz). Runways and water are level.
    pub gradient: (f64, f64),
    /// Code of the runway underneath, if any.
    pub runway: Option<String>,
}

/// Ground under (x, z). Runways within `runway_radius` of their threshold
/// override the terrain with their own flat elevation.
pub fn query_ground(
    terrain: &TerrainHeightField,
    waypoints: &WaypointTable,
    x: f64,
    z: f64,
    runway_radius: f64,
) -> GroundSample {
    if let Some(runway) = waypoints.runway_at(x, z, runway_radius) {
        return GroundSample {
            height: runway.elevation(),
            surface: SurfaceType::Runway,
            gradient: (0.0, 0.0),
            runway: Some(runway.code.clone()),
        };
    }
    GroundSample {
        height: terrain.ground_height(x, z),
        surface: if terrain.is_water(x, z) {
            SurfaceType::Water
        } else {
            SurfaceType::Terrain
        },
        gradient: terrain.gradient_at(x, z),
        runway: None,
    }
}
