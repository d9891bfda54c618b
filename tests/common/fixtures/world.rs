use flightline::resources::{TerrainHeightField, WaypointTable, WorldData};
use std::sync::Arc;

use super::TEST_FIELD_ELEVATION;

/// Two runways and one prohibited zone.
///
/// HOM: threshold at the origin, heading north, 1200 m long.
/// RDG: threshold at (8000, 6000), heading west, 900 m long.
/// P01: 2 km square centred on (-5000, 5000).
pub const TEST_WORLD_JSON: &str = r#"{
    "runways": [
        {"code": "HOM", "name": "Home Field", "pos": [0.0, 50.0, 0.0], "width": 30.0, "length": 1200.0, "heading": 0.0},
        {"code": "RDG", "name": "Ridge Strip", "pos": [8000.0, 50.0, 6000.0], "width": 25.0, "length": 900.0, "heading": 270.0}
    ],
    "prohibited_zones": [
        {"code": "P01", "name": "Range", "pos": [-5000.0, 5000.0], "dims": [2000.0, 2000.0]}
    ]
}"#;

pub fn create_test_waypoints() -> Arc<WaypointTable> {
    let data = WorldData::from_json(TEST_WORLD_JSON).expect("test world parses");
    Arc::new(WaypointTable::try_from(data).expect("test world is valid"))
}

pub fn create_flat_terrain(elevation: f64, sea_level: f64) -> Arc<TerrainHeightField> {
    Arc::new(TerrainHeightField::flat(elevation, 100_000.0, sea_level).expect("flat terrain"))
}

pub fn create_test_terrain() -> Arc<TerrainHeightField> {
    create_flat_terrain(TEST_FIELD_ELEVATION, 0.0)
}

/// 3x3 field with a ridge down the middle and a basin below sea level in
/// the south-east corner.
pub fn create_rough_terrain() -> Arc<TerrainHeightField> {
    #[rustfmt::skip]
    let samples = vec![
        20.0, 300.0, 40.0,
        10.0, 250.0, 5.0,
        0.0, 120.0, -60.0,
    ];
    Arc::new(TerrainHeightField::new(3, 3, samples, 10_000.0, 0.0).expect("rough terrain"))
}

/// 2 km square rising 1 m per metre from 0 m on the south edge to 2000 m
/// on the north edge.
pub fn create_hillside_terrain() -> Arc<TerrainHeightField> {
    #[rustfmt::skip]
    let samples = vec![
        2000.0, 2000.0, 2000.0,
        1000.0, 1000.0, 1000.0,
        0.0, 0.0, 0.0,
    ];
    Arc::new(TerrainHeightField::new(3, 3, samples, 1000.0, 0.0).expect("hillside terrain"))
}
