pub mod aerodynamics;
pub mod collisions;
mod damage;
mod navigation;
pub mod physics;
mod state_machine;

pub use aerodynamics::{calculate_air_data, calculate_forces, ForceBreakdown};
pub use collisions::{
    query_ground, ContactOutcome, GroundContactResolver, GroundSample, LandingQuality,
    SurfaceType, Touchdown,
};
pub use damage::DamageModel;
pub use navigation::{Guidance, NavigationComputer};
pub use physics::{overspeed_severity, DynamicsReport, FlightDynamicsModel};
pub use state_machine::{FlightEvent, FlightStateMachine};
