use flightline::resources::{SimulationConfig, TerrainConfig};

/// Elevation of the flat test terrain and of every test runway.
pub const TEST_FIELD_ELEVATION: f64 = 50.0;

/// Default configuration over flat terrain at [`TEST_FIELD_ELEVATION`].
pub fn create_test_config() -> SimulationConfig {
    SimulationConfig {
        terrain: TerrainConfig::flat(TEST_FIELD_ELEVATION),
        ..Default::default()
    }
}
