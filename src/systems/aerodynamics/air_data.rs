use crate::components::{AirData, SpatialComponent};

/// Air data for the current state. No wind is modelled, so the relative
/// wind is the negated ground velocity.
///
/// Below `min_airspeed` the angles are undefined and reported as zero with
/// `valid` cleared; callers must then apply no aerodynamic forces.
pub fn calculate_air_data(spatial: &SpatialComponent, density: f64, min_airspeed: f64) -> AirData {
    let airspeed = spatial.velocity.norm();
    if !(airspeed.is_finite() && airspeed > min_airspeed) {
        return AirData {
            true_airspeed: if airspeed.is_finite() { airspeed } else { 0.0 },
            density,
            ..AirData::default()
        };
    }

    let axes = spatial.attitude.body_axes();
    let u = spatial.velocity.dot(&axes.forward);
    let v = spatial.velocity.dot(&axes.right);
    let w = spatial.velocity.dot(&axes.up);

    AirData {
        true_airspeed: airspeed,
        alpha: (-w).atan2(u),
        beta: (v / airspeed).clamp(-1.0, 1.0).asin(),
        dynamic_pressure: 0.5 * density * airspeed * airspeed,
        density,
        valid: true,
    }
}
