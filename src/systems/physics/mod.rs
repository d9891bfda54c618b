mod dynamics;
mod integrator;
mod rotation;

pub use dynamics::{overspeed_severity, DynamicsReport, FlightDynamicsModel};
pub use integrator::{apply_velocity_limits, clamp_to_travel_limit, integrate_linear, integrate_rotation};
pub use rotation::{
    angular_accelerations, bank_turn_rate, damage_authority, rate_limits, speed_authority,
    ControlAuthority,
};
