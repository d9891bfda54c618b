pub mod damage;
pub mod ground;
pub mod navigation;
pub mod physics;
pub mod simulation;
pub mod terrain;

pub use damage::DamageConfig;
pub use ground::GroundConfig;
pub use navigation::NavigationConfig;
pub use physics::PhysicsConfig;
pub use simulation::SimulationConfig;
pub use terrain::{TerrainConfig, TerrainSource};
