use approx::assert_relative_eq;
use flightline::{
    components::ControlSurfaces,
    utils::{deg_to_rad, wrap_pi},
};
use nalgebra::Vector3;
use std::f64::consts::TAU;

use crate::common::{airborne_spawn, create_test_session};

#[test]
fn test_guidance_matches_planar_trigonometry() {
    let mut session = create_test_session();
    session.select_waypoint("RDG").unwrap();
    let position = Vector3::new(-1000.0, 1200.0, -2000.0);
    session.reset(airborne_spawn(position, 30.0, 50.0, 0.0));

    let guidance = session.guidance();
    let dx = 8000.0 - position.x;
    let dz = 6000.0 - position.z;
    assert_eq!(guidance.waypoint, "RDG");
    assert_relative_eq!(guidance.distance, (dx * dx + dz * dz).sqrt(), epsilon = 1e-9);
    assert_relative_eq!(guidance.bearing, dx.atan2(dz), epsilon = 1e-12);
    assert_relative_eq!(guidance.eta.unwrap(), guidance.distance / 50.0, epsilon = 1e-9);
    assert_relative_eq!(guidance.ground_track.unwrap(), deg_to_rad(30.0), epsilon = 1e-9);
    assert_relative_eq!(
        guidance.relative_bearing,
        wrap_pi(dx.atan2(dz) - deg_to_rad(30.0)),
        epsilon = 1e-12
    );
    assert!(!guidance.is_near_destination);
    assert_eq!(guidance.glideslope_deviation, None);
}

#[test]
fn test_bearing_stays_in_range() {
    let mut session = create_test_session();
    for (x, z) in [(500.0, 10.0), (500.0, -10.0), (0.0, 3000.0), (-700.0, 0.0)] {
        session.reset(airborne_spawn(Vector3::new(x, 600.0, z), 0.0, 50.0, 0.0));
        let guidance = session.guidance();
        assert!((0.0..TAU).contains(&guidance.bearing), "bearing {}", guidance.bearing);
        assert_relative_eq!(
            guidance.bearing,
            (-x).atan2(-z).rem_euclid(TAU),
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_glideslope_near_destination() {
    let mut session = create_test_session();
    // 2 km south of HOM, 40 m above the 3 degree path
    let distance = 2000.0;
    let on_path = 50.0 + distance * deg_to_rad(3.0).tan();
    session.reset(airborne_spawn(Vector3::new(0.0, on_path + 40.0, -distance), 0.0, 45.0, -3.0));

    let guidance = session.guidance();
    assert!(guidance.is_near_destination);
    assert_relative_eq!(guidance.glideslope_deviation.unwrap(), 40.0, epsilon = 1e-9);
    assert_relative_eq!(guidance.bearing, 0.0, epsilon = 1e-12);
    let headings = guidance.runway_headings.unwrap();
    assert_relative_eq!(headings[0], 0.0);
    assert_relative_eq!(headings[1], std::f64::consts::PI);
}

#[test]
fn test_parked_aircraft_has_no_eta() {
    let mut session = create_test_session();
    let report = session.tick(&ControlSurfaces::default(), 1.0 / 120.0);
    assert_eq!(report.guidance.eta, None);
    assert_eq!(report.guidance.ground_track, None);
    assert!(report.guidance.is_near_destination);
}

#[test]
fn test_waypoint_cycling() {
    let mut session = create_test_session();
    assert_eq!(session.selected().code, "HOM");
    assert_eq!(session.cycle_waypoint().code, "RDG");
    assert_eq!(session.cycle_waypoint().code, "HOM");
    assert_eq!(session.select_waypoint("RDG"), Some(1));
    assert_eq!(session.select_waypoint("ZZZ"), None);
    assert_eq!(session.selected().code, "RDG");
}

#[test]
fn test_prohibited_zone_reported() {
    let mut session = create_test_session();
    session.reset(airborne_spawn(Vector3::new(-5200.0, 900.0, 4700.0), 90.0, 50.0, 0.0));
    let report = session.tick(&ControlSurfaces::with_throttle(0.6), 1.0 / 120.0);
    assert_eq!(report.zone.as_deref(), Some("P01"));

    session.reset(airborne_spawn(Vector3::new(0.0, 900.0, 0.0), 90.0, 50.0, 0.0));
    assert_eq!(session.snapshot().zone, None);
}
