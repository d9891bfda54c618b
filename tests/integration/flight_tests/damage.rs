use flightline::{
    components::{CrashCause, DamageSignal, DamageState, FlightMode},
    resources::{DamageConfig, GroundConfig},
    systems::{overspeed_severity, DamageModel, FlightEvent},
};
use nalgebra::Vector3;

use crate::common::{
    airborne_spawn, assert_integrity_non_increasing, collect_events, controls,
    create_test_session, simulate_duration, simulate_until,
};

#[test]
fn test_sustained_overspeed_component_level() {
    let model = DamageModel::new(DamageConfig::default(), &GroundConfig::default());
    let vne = 82.31;
    let severity = overspeed_severity(vne * 1.2, vne);
    let dt = 1.0 / 120.0;

    let mut damage = DamageState::default();
    let mut previous = damage.integrity();
    let mut destroyed_at = None;
    for step in 0..(30 * 120) {
        if model.apply_overspeed(&mut damage, severity, dt) == DamageSignal::Destroyed {
            assert!(destroyed_at.is_none(), "destruction signalled twice");
            destroyed_at = Some(step as f64 * dt);
        }
        assert!(damage.integrity() <= previous);
        previous = damage.integrity();
    }

    let destroyed_at = destroyed_at.expect("overspeed never destroyed the airframe");
    assert!(destroyed_at < 30.0);
    assert!(damage.is_destroyed());
}

#[test]
fn test_brief_overspeed_is_negligible() {
    let model = DamageModel::new(DamageConfig::default(), &GroundConfig::default());
    let mut damage = DamageState::default();
    // Half a second at 5% over the limit
    for _ in 0..60 {
        model.apply_overspeed(&mut damage, 0.05, 1.0 / 120.0);
    }
    assert!(damage.integrity() > 98.0);
}

#[test]
fn test_sustained_overspeed_in_a_dive() {
    let mut session = create_test_session();
    let vne = session.config().aircraft.never_exceed_speed;
    session.reset(airborne_spawn(Vector3::new(0.0, 4000.0, -10_000.0), 0.0, vne * 1.25, -30.0));

    let reports = simulate_until(&mut session, &controls(1.0, 0.0), 30.0, |r| {
        r.mode == FlightMode::Destroyed
    });

    assert_integrity_non_increasing(&reports);
    let last = reports.last().expect("ticks ran");
    assert_eq!(last.mode, FlightMode::Destroyed);
    assert!(session.elapsed() < 30.0);
    assert!(reports.iter().all(|r| r.overspeed_warning));
    assert_eq!(
        collect_events(&reports),
        vec![FlightEvent::Destroyed {
            cause: CrashCause::StructuralFailure
        }]
    );
    assert!(session.agl() > 0.0);
}

#[test]
fn test_damage_reduces_control_authority() {
    let mut healthy = create_test_session();
    let mut damaged = create_test_session();
    let spawn = airborne_spawn(Vector3::new(0.0, 1500.0, -20_000.0), 0.0, 50.0, 0.0);
    healthy.reset(spawn);

    // Bring integrity down with a short overspeed dive, then start over
    // from the same spawn without resetting damage
    let vne = damaged.config().aircraft.never_exceed_speed;
    damaged.reset(airborne_spawn(Vector3::new(0.0, 4000.0, -10_000.0), 0.0, vne * 1.25, -30.0));
    simulate_until(&mut damaged, &controls(1.0, 0.0), 30.0, |r| r.integrity < 60.0);
    let integrity = damaged.damage().integrity();
    assert!(integrity < 60.0 && integrity > 0.0);

    let mut roll_input = controls(0.6, 0.0);
    roll_input.aileron = 1.0;
    simulate_duration(&mut healthy, &roll_input, 0.5);
    let healthy_roll = healthy.aircraft().spatial.angular_rates.roll;
    assert!(healthy_roll > 0.0);

    // Both are above the reference speed, so only the damage term differs
    simulate_duration(&mut damaged, &roll_input, 0.5);
    let damaged_roll = damaged.aircraft().spatial.angular_rates.roll;
    assert!(damaged_roll > 0.0);
    assert!(damaged_roll < healthy_roll);
}
