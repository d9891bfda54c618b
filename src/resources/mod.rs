pub mod config;
mod session;
pub mod terrain;
mod world;

pub use config::{
    DamageConfig, GroundConfig, NavigationConfig, PhysicsConfig, SimulationConfig, TerrainConfig,
    TerrainSource,
};
pub use session::{AirborneSpawn, FlightSession, SpawnPoint, TickReport};
pub use terrain::{build_height_field, TerrainHeightField, TextureNoise};
pub use world::{RunwayRecord, WaypointTable, WorldData, ZoneRecord};
