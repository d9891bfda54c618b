mod config;
mod world;

// Re-export test fixtures
pub use config::*;
pub use world::*;
