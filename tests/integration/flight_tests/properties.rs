use approx::assert_relative_eq;
use flightline::{
    components::{ControlSurfaces, FlightMode},
    resources::{FlightSession, SpawnPoint},
    utils::deg_to_rad,
};
use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::common::{
    airborne_spawn, assert_aircraft_state_valid, assert_integrity_non_increasing,
    assert_position_eq, controls, create_rough_terrain, create_test_config, create_test_session,
    create_test_waypoints, simulate_until, TEST_FIELD_ELEVATION,
};

fn random_controls(rng: &mut ChaCha8Rng) -> ControlSurfaces {
    let brakes = rng.gen_bool(0.1);
    let mut value = |lo: f64, hi: f64| {
        if rng.gen_bool(0.02) {
            f64::NAN
        } else {
            rng.gen_range(lo..hi)
        }
    };
    ControlSurfaces {
        throttle: value(-0.5, 1.5),
        flaps: value(-0.5, 1.5),
        rudder: value(-3.0, 3.0),
        elevator: value(-3.0, 3.0),
        aileron: value(-3.0, 3.0),
        brakes,
    }
}

fn random_dt(rng: &mut ChaCha8Rng) -> f64 {
    match rng.gen_range(0..6) {
        0 => 1e-6,
        1 => 1.0 / 120.0,
        2 => 1.0 / 30.0,
        3 => rng.gen_range(0.0..0.3),
        4 => 5.0,
        _ => 1.0 / 60.0,
    }
}

#[test]
fn test_state_stays_finite_under_random_inputs() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for run in 0..4 {
        let mut session = create_test_session();
        if run % 2 == 1 {
            session.reset(airborne_spawn(
                Vector3::new(0.0, 2000.0, 0.0),
                rng.gen_range(0.0..360.0),
                rng.gen_range(20.0..90.0),
                rng.gen_range(-20.0..20.0),
            ));
        }
        let mut reports = Vec::new();
        for _ in 0..3000 {
            let controls = random_controls(&mut rng);
            let report = session.tick(&controls, random_dt(&mut rng));
            assert_aircraft_state_valid(session.aircraft());
            assert!(report.agl.is_finite());
            assert!(report.lift_to_weight.is_finite());
            assert!(report.guidance.distance.is_finite());
            reports.push(report);
        }
        assert_integrity_non_increasing(&reports);
    }
}

#[test]
fn test_reset_is_idempotent() {
    let mut session = create_test_session();
    let spawn = airborne_spawn(Vector3::new(100.0, 900.0, -300.0), 45.0, 55.0, 2.0);

    simulate_until(&mut session, &controls(1.0, 0.4), 5.0, |_| false);
    session.reset(spawn);
    let once = (*session.aircraft(), *session.damage(), *session.status());

    session.reset(spawn);
    let twice = (*session.aircraft(), *session.damage(), *session.status());
    assert_eq!(once, twice);

    let mut fresh = create_test_session();
    fresh.reset(spawn);
    assert_eq!(*fresh.aircraft(), once.0);
    assert_eq!(fresh.snapshot(), session.snapshot());
}

#[test]
fn test_reset_to_runway_after_crash() {
    let mut session = create_test_session();
    session.reset(airborne_spawn(Vector3::new(3000.0, 60.0, 3000.0), 0.0, 50.0, -20.0));
    simulate_until(&mut session, &controls(0.0, 0.0), 10.0, |r| r.mode == FlightMode::Destroyed);
    assert_eq!(session.mode(), FlightMode::Destroyed);

    session.reset(SpawnPoint::Runway { index: 1 });
    let parked = *session.aircraft();
    session.reset(SpawnPoint::Runway { index: 1 });

    assert_eq!(*session.aircraft(), parked);
    assert_eq!(session.mode(), FlightMode::Grounded);
    assert_eq!(session.damage().integrity(), 100.0);
    assert_eq!(session.status().crash_cause, None);
    // RDG points west, so the spawn sits west of its threshold
    assert_position_eq(
        &parked.spatial.position,
        &Vector3::new(8000.0 - 20.0, TEST_FIELD_ELEVATION, 6000.0),
        1e-9,
    );
    assert_relative_eq!(parked.spatial.attitude.yaw, deg_to_rad(270.0), epsilon = 1e-12);
}

#[test]
fn test_agl_is_height_above_terrain_or_sea() {
    let terrain = create_rough_terrain();
    let mut session =
        FlightSession::new(create_test_config(), terrain.clone(), create_test_waypoints()).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    for _ in 0..200 {
        let position = Vector3::new(
            rng.gen_range(-12_000.0..12_000.0),
            rng.gen_range(0.0..2000.0),
            rng.gen_range(-12_000.0..12_000.0),
        );
        let expected = position.y
            - terrain
                .elevation_at(position.x, position.z)
                .max(terrain.sea_level());
        assert_eq!(terrain.agl(&position), expected);

        session.reset(airborne_spawn(position, 0.0, 50.0, 0.0));
        assert_eq!(session.agl(), expected);
        assert_eq!(session.snapshot().agl, expected);
    }
}

#[test]
fn test_stall_round_trip() {
    let mut session = create_test_session();
    session.reset(airborne_spawn(Vector3::new(0.0, 2000.0, 0.0), 0.0, 32.0, 0.0));

    let stalling = simulate_until(&mut session, &controls(0.3, 1.0), 15.0, |r| r.stall_warning);
    assert!(
        stalling.last().is_some_and(|r| r.stall_warning),
        "full back stick never stalled"
    );
    assert!(!stalling[0].stall_warning);

    let recovering = simulate_until(&mut session, &controls(0.0, -1.0), 15.0, |r| {
        !r.stall_warning
    });
    let recovered = recovering.last().expect("ticks ran");
    assert!(!recovered.stall_warning, "never recovered from the stall");
    assert_eq!(recovered.mode, FlightMode::Airborne);
    assert_eq!(recovered.integrity, 100.0);
    assert!(recovered.events.is_empty());
}

#[test]
fn test_stall_flag_from_synthetic_states() {
    use flightline::components::{AircraftState, Attitude, DamageState, SpatialComponent};
    use flightline::resources::{PhysicsConfig, TerrainHeightField};
    use flightline::systems::FlightDynamicsModel;

    let model = FlightDynamicsModel::new(Default::default(), PhysicsConfig::default(), 0.2);
    let terrain = TerrainHeightField::flat(0.0, 10_000.0, 0.0).unwrap();
    let at_alpha = |alpha_deg: f64| {
        let mut state = AircraftState::new(SpatialComponent {
            position: Vector3::new(0.0, 1000.0, 0.0),
            velocity: Vector3::new(0.0, 0.0, 40.0),
            attitude: Attitude::new(deg_to_rad(alpha_deg), 0.0, 0.0),
            ..Default::default()
        });
        model
            .step(&mut state, &ControlSurfaces::default(), &terrain, &DamageState::default(), false, 0.0)
            .stalled
    };

    assert!(!at_alpha(5.0));
    assert!(at_alpha(20.0));
    assert!(!at_alpha(5.0));
    assert!(at_alpha(-20.0));
}
