use crate::components::{AeroCoefficients, AircraftGeometry};

/// Lift coefficient for angle of attack `alpha` (rad) and flap setting.
///
/// Linear up to the stall angle in either direction, then decaying towards
/// the residual value.
pub fn lift_coefficient(alpha: f64, flaps: f64, aero: &AeroCoefficients) -> f64 {
    let alpha_deg = alpha.to_degrees();
    let slope = aero.lift_slope();
    let base = if alpha_deg > aero.stall_angle {
        let excess = alpha_deg - aero.stall_angle;
        (aero.cl_max * (1.0 - aero.post_stall_lift_decay * excess)).max(aero.residual_lift_coefficient)
    } else if alpha_deg < -aero.stall_angle {
        let excess = -aero.stall_angle - alpha_deg;
        let cl_min = aero.cl0 - slope * aero.stall_angle;
        (cl_min * (1.0 - aero.post_stall_lift_decay * excess)).min(-aero.residual_lift_coefficient)
    } else {
        aero.cl0 + slope * alpha_deg
    };
    base + aero.flap_lift_offset * flaps
}

/// Drag coefficient. `ground_effect` scales the induced term, 1.0 out of ground effect.
pub fn drag_coefficient(
    alpha: f64,
    cl: f64,
    flaps: f64,
    ground_effect: f64,
    aero: &AeroCoefficients,
    geometry: &AircraftGeometry,
) -> f64 {
    let alpha_deg = alpha.to_degrees().abs();
    let induced = cl * cl / geometry.induced_drag_factor() * ground_effect;
    let stall_excess = (alpha_deg - aero.stall_angle).max(0.0);
    let cd = aero.cd_min
        + aero.cd_slope * alpha_deg
        + induced
        + aero.flap_drag_coefficient * flaps * flaps
        + aero.stall_drag_factor * stall_excess * stall_excess;
    cd.min(aero.max_drag_coefficient)
}

/// Whether `alpha` (rad) is past the stall angle.
pub fn is_stalled(alpha: f64, aero: &AeroCoefficients) -> bool {
    alpha.to_degrees().abs() > aero.stall_angle
}

/// Induced drag multiplier near the ground, in [0, 1].
pub fn ground_effect_factor(agl: f64, wing_span: f64) -> f64 {
    if !(agl < wing_span) {
        return 1.0;
    }
    let ratio = 16.0 * agl.max(0.0) / wing_span;
    let squared = ratio * ratio;
    squared / (1.0 + squared)
}
