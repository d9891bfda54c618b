use nalgebra::Vector3;
use std::f64::consts::FRAC_PI_2;

use crate::components::{AngularRates, SpatialComponent};
use crate::utils::{deg_to_rad, wrap_pi, wrap_two_pi, MAX_PITCH_ANGLE};

/// Semi-implicit Euler step: velocity from the net force first, then
/// position from the updated velocity.
pub fn integrate_linear(spatial: &mut SpatialComponent, net_force: &Vector3<f64>, mass: f64, dt: f64) {
    spatial.velocity += net_force / mass * dt;
    spatial.position += spatial.velocity * dt;
}

/// Advance rates from angular accelerations, clamp them, then advance the
/// Euler angles. `turn_rate` is extra yaw rate from bank that is not stored
/// in the yaw rate itself.
pub fn integrate_rotation(
    spatial: &mut SpatialComponent,
    accelerations: &AngularRates,
    rate_limits: &AngularRates,
    turn_rate: f64,
    dt: f64,
) {
    let rates = &mut spatial.angular_rates;
    rates.pitch = (rates.pitch + accelerations.pitch * dt).clamp(-rate_limits.pitch, rate_limits.pitch);
    rates.roll = (rates.roll + accelerations.roll * dt).clamp(-rate_limits.roll, rate_limits.roll);
    rates.yaw = (rates.yaw + accelerations.yaw * dt).clamp(-rate_limits.yaw, rate_limits.yaw);

    let attitude = &mut spatial.attitude;
    // Pitch authority fades out towards the vertical
    let pitch_scale = (1.0 - attitude.pitch.abs() / FRAC_PI_2).max(0.0);
    let max_pitch = deg_to_rad(MAX_PITCH_ANGLE);
    attitude.pitch = (attitude.pitch + rates.pitch * pitch_scale * dt).clamp(-max_pitch, max_pitch);
    attitude.roll = wrap_pi(attitude.roll + rates.roll * dt);
    attitude.yaw = wrap_two_pi(attitude.yaw + (rates.yaw + turn_rate) * dt);
}

/// Applies velocity limits to prevent excessive motion.
pub fn apply_velocity_limits(spatial: &mut SpatialComponent, max_velocity: f64) {
    let velocity_norm = spatial.velocity.norm();
    if velocity_norm > max_velocity {
        spatial.velocity *= max_velocity / velocity_norm;
    }
}

/// Keep the aircraft inside the square travel area. Velocity into a wall is
/// removed.
pub fn clamp_to_travel_limit(spatial: &mut SpatialComponent, limit: f64) {
    if spatial.position.x.abs() > limit {
        spatial.position.x = spatial.position.x.clamp(-limit, limit);
        spatial.velocity.x = 0.0;
    }
    if spatial.position.z.abs() > limit {
        spatial.position.z = spatial.position.z.clamp(-limit, limit);
        spatial.velocity.z = 0.0;
    }
}
