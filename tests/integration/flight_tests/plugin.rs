use approx::assert_relative_eq;
use flightline::{
    components::{ControlSurfaces, FlightMode},
    resources::SpawnPoint,
    systems::FlightEvent,
    utils::{metres_to_feet, mps_to_knots},
};
use nalgebra::Vector3;

use crate::common::{airborne_spawn, TestAppBuilder, TEST_FIELD_ELEVATION};

#[test]
fn test_readout_tracks_session() {
    let mut app = TestAppBuilder::new()
        .with_spawn(airborne_spawn(Vector3::new(0.0, 1000.0, 0.0), 90.0, 50.0, 0.0))
        .build();
    app.set_controls(ControlSurfaces::with_throttle(0.6));
    app.run_steps(120);

    let readout = app.readout().clone();
    let session = app.session();
    assert_eq!(readout.mode, FlightMode::Airborne);
    assert_eq!(readout.position, session.aircraft().spatial.position);
    assert_relative_eq!(readout.airspeed_knots, mps_to_knots(readout.airspeed));
    assert_relative_eq!(readout.altitude_feet, metres_to_feet(readout.altitude));
    assert_relative_eq!(readout.agl, readout.altitude - TEST_FIELD_ELEVATION, epsilon = 1e-9);
    assert_relative_eq!(readout.heading, 90.0, epsilon = 1.0);
    assert_relative_eq!(readout.throttle, 0.6);
    assert_relative_eq!(session.elapsed(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_takeoff_through_plugin() {
    let mut app = TestAppBuilder::new().build();
    assert_eq!(app.readout().mode, FlightMode::Grounded);

    app.set_controls(ControlSurfaces::with_throttle(1.0));
    let mut steps = 0;
    while app.readout().mode == FlightMode::Grounded && steps < 120 * 90 {
        app.run_steps(1);
        steps += 1;
    }

    assert_eq!(app.readout().mode, FlightMode::Airborne);
    assert_eq!(app.flight_events(), vec![FlightEvent::Liftoff]);
}

#[test]
fn test_reset_event_applies_between_ticks() {
    let mut app = TestAppBuilder::new()
        .with_spawn(airborne_spawn(Vector3::new(3000.0, 60.0, 3000.0), 0.0, 50.0, -20.0))
        .build();
    app.run_steps(120 * 3);
    assert_eq!(app.readout().mode, FlightMode::Destroyed);
    assert!(app
        .flight_events()
        .iter()
        .any(|e| matches!(e, FlightEvent::Destroyed { .. })));

    app.request_reset(Some(SpawnPoint::Runway { index: 0 }));
    app.run_steps(1);

    let readout = app.readout();
    assert_eq!(readout.mode, FlightMode::Grounded);
    assert_eq!(readout.integrity, 100.0);
    assert_eq!(readout.altitude, TEST_FIELD_ELEVATION);
    // Exactly one physics step has run since the reset
    assert_relative_eq!(app.session().elapsed(), 1.0 / 120.0, epsilon = 1e-12);
}

#[test]
fn test_restart_uses_last_spawn() {
    let spawn = airborne_spawn(Vector3::new(0.0, 1000.0, 0.0), 180.0, 50.0, 0.0);
    let mut app = TestAppBuilder::new().with_spawn(spawn).build();
    app.set_controls(ControlSurfaces::with_throttle(1.0));
    app.run_steps(240);

    app.request_reset(None);
    app.run_steps(1);

    assert_eq!(app.session().spawn(), spawn);
    assert_eq!(app.readout().throttle, 0.0);
    assert_relative_eq!(app.readout().position.y, 1000.0, epsilon = 0.1);
}

#[test]
fn test_waypoint_selection_events() {
    let mut app = TestAppBuilder::new().build();
    assert_eq!(app.readout().guidance.waypoint, "HOM");

    app.select_waypoint(None);
    app.run_steps(1);
    assert_eq!(app.readout().guidance.waypoint, "RDG");

    app.select_waypoint(Some("HOM"));
    app.run_steps(1);
    assert_eq!(app.readout().guidance.waypoint, "HOM");

    app.select_waypoint(Some("NOP"));
    app.run_steps(1);
    assert_eq!(app.readout().guidance.waypoint, "HOM");
}
