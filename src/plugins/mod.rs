mod flight;

pub use flight::{
    handle_reset_requests, handle_waypoint_selection, simulate_flight, update_readout,
    ControlInput, FlightPlugin, FlightReadout, FlightSet, ResetFlight, SelectWaypoint,
};
