use flightline::{
    components::ControlSurfaces,
    resources::{AirborneSpawn, FlightSession, SpawnPoint, TickReport},
    systems::FlightEvent,
    utils::deg_to_rad,
};
use nalgebra::Vector3;

use crate::common::{create_test_config, create_test_terrain, create_test_waypoints};

/// Session over flat terrain with the test world, parked on HOM.
pub fn create_test_session() -> FlightSession {
    FlightSession::new(create_test_config(), create_test_terrain(), create_test_waypoints())
        .expect("test session")
}

/// Trimmed airborne spawn. Angles in degrees.
pub fn airborne_spawn(
    position: Vector3<f64>,
    heading_deg: f64,
    airspeed: f64,
    flight_path_deg: f64,
) -> SpawnPoint {
    SpawnPoint::Airborne(AirborneSpawn {
        position,
        heading: deg_to_rad(heading_deg),
        airspeed,
        flight_path_angle: deg_to_rad(flight_path_deg),
    })
}

/// Tick `session` at its physics timestep for `seconds` of simulated time.
pub fn simulate_duration(
    session: &mut FlightSession,
    controls: &ControlSurfaces,
    seconds: f64,
) -> Vec<TickReport> {
    let timestep = session.config().physics.timestep;
    let steps = (seconds / timestep).round() as usize;
    (0..steps).map(|_| session.tick(controls, timestep)).collect()
}

/// Tick until `done` holds for a report or `max_seconds` elapse. Returns
/// every report, the last one being the first to satisfy `done` if any did.
pub fn simulate_until(
    session: &mut FlightSession,
    controls: &ControlSurfaces,
    max_seconds: f64,
    mut done: impl FnMut(&TickReport) -> bool,
) -> Vec<TickReport> {
    let timestep = session.config().physics.timestep;
    let steps = (max_seconds / timestep).round() as usize;
    let mut reports = Vec::new();
    for _ in 0..steps {
        let report = session.tick(controls, timestep);
        let finished = done(&report);
        reports.push(report);
        if finished {
            break;
        }
    }
    reports
}

pub fn collect_events(reports: &[TickReport]) -> Vec<FlightEvent> {
    reports.iter().flat_map(|r| r.events.iter().copied()).collect()
}

pub fn controls(throttle: f64, elevator: f64) -> ControlSurfaces {
    ControlSurfaces {
        throttle,
        elevator,
        ..Default::default()
    }
}
