mod aero_coef;
mod aircraft;
mod geometry;
mod handling;

pub use aero_coef::AeroCoefficients;
pub use aircraft::AircraftConfig;
pub use geometry::AircraftGeometry;
pub use handling::HandlingQualities;
