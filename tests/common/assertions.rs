use approx::assert_relative_eq;
use flightline::{
    components::{AircraftState, SpatialComponent},
    resources::TickReport,
};
use nalgebra::Vector3;

/// Assert that a spatial component's state is valid
#[track_caller]
pub fn assert_spatial_valid(spatial: &SpatialComponent) {
    assert!(
        spatial.position.iter().all(|x| x.is_finite()),
        "Position is not finite: {:?}",
        spatial.position
    );
    assert!(
        spatial.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite: {:?}",
        spatial.velocity
    );
    assert!(spatial.attitude.is_finite(), "Attitude is not finite: {:?}", spatial.attitude);
    assert!(
        spatial.angular_rates.is_finite(),
        "Angular rates are not finite: {:?}",
        spatial.angular_rates
    );
    assert!(
        spatial.attitude.pitch.abs() < std::f64::consts::FRAC_PI_2,
        "Pitch reached the gimbal limit: {}",
        spatial.attitude.pitch
    );
}

/// Assert that an aircraft's state is valid and its controls are in range
#[track_caller]
pub fn assert_aircraft_state_valid(state: &AircraftState) {
    assert_spatial_valid(&state.spatial);
    assert!(
        state.controls.is_within_limits(),
        "Controls out of range: {:?}",
        state.controls
    );
}

/// Assert that two positions are approximately equal
#[track_caller]
pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

#[track_caller]
pub fn assert_integrity_non_increasing(reports: &[TickReport]) {
    for pair in reports.windows(2) {
        assert!(
            pair[1].integrity <= pair[0].integrity,
            "Integrity increased from {} to {}",
            pair[0].integrity,
            pair[1].integrity
        );
    }
}
