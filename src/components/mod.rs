pub mod aircraft;
pub mod controls;
pub mod damage;
pub mod flight_state;
pub mod spatial;
pub mod waypoint;

pub use aircraft::{
    AeroCoefficients, AirData, AircraftConfig, AircraftGeometry, AircraftState, HandlingQualities,
};
pub use controls::ControlSurfaces;
pub use damage::{DamageSignal, DamageState};
pub use flight_state::{CrashCause, FlightMode, FlightStatus};
pub use spatial::{AngularRates, Attitude, BodyAxes, SpatialComponent};
pub use waypoint::{validate_code, ProhibitedZone, Waypoint};
