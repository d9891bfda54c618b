use approx::assert_relative_eq;
use flightline::components::{ControlSurfaces, FlightMode};
use nalgebra::Vector3;

use crate::common::{
    airborne_spawn, assert_aircraft_state_valid, create_test_session, simulate_duration,
};

#[test]
fn test_level_cruise_for_sixty_seconds() {
    let mut session = create_test_session();
    session.reset(airborne_spawn(Vector3::new(0.0, 1500.0, -20_000.0), 0.0, 50.0, 0.0));

    let reports = simulate_duration(&mut session, &ControlSurfaces::with_throttle(0.6), 60.0);

    assert_eq!(reports.len(), 7200);
    for report in &reports {
        assert_eq!(report.mode, FlightMode::Airborne);
        assert!(!report.stall_warning);
        assert!(!report.overspeed_warning);
        assert_eq!(report.integrity, 100.0);
    }
    assert!(reports.iter().all(|r| r.events.is_empty()));

    let aircraft = session.aircraft();
    assert_aircraft_state_valid(aircraft);
    assert!((aircraft.spatial.position.y - 1500.0).abs() < 500.0);
    // Symmetric flight stays on the initial heading and track
    assert_relative_eq!(aircraft.spatial.position.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(aircraft.spatial.attitude.roll, 0.0, epsilon = 1e-9);
    assert!(aircraft.spatial.position.z > -20_000.0 + 2500.0);
}

#[test]
fn test_banked_flight_turns() {
    let mut session = create_test_session();
    session.reset(airborne_spawn(Vector3::new(0.0, 1500.0, -20_000.0), 0.0, 50.0, 0.0));

    let mut controls = ControlSurfaces::with_throttle(0.7);
    controls.aileron = 0.5;
    simulate_duration(&mut session, &controls, 1.0);
    controls.aileron = 0.0;
    simulate_duration(&mut session, &controls, 3.0);

    let attitude = session.aircraft().spatial.attitude;
    assert!(attitude.roll > 0.0, "right aileron banks right");
    assert!(attitude.yaw > 0.0 && attitude.yaw < std::f64::consts::PI, "right bank turns right");
    assert_eq!(session.mode(), FlightMode::Airborne);
}
