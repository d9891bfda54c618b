pub mod air_data;
pub mod config;
pub mod state;

pub use air_data::AirData;
pub use config::{AeroCoefficients, AircraftConfig, AircraftGeometry, HandlingQualities};
pub use state::AircraftState;
