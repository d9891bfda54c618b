use nalgebra::Vector3;

use super::{drag_coefficient, ground_effect_factor, is_stalled, lift_coefficient};
use crate::components::{AirData, AircraftConfig, BodyAxes, ControlSurfaces};

/// World-frame forces acting on the airframe for one tick (N).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceBreakdown {
    pub lift: Vector3<f64>,
    pub drag: Vector3<f64>,
    pub side: Vector3<f64>,
    pub thrust: Vector3<f64>,
    pub weight: Vector3<f64>,
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
    pub stalled: bool,
}

impl ForceBreakdown {
    pub fn net(&self) -> Vector3<f64> {
        self.lift + self.drag + self.side + self.thrust + self.weight
    }

    /// Vertical lift as a fraction of weight.
    pub fn lift_to_weight(&self) -> f64 {
        let weight = -self.weight.y;
        if weight > 0.0 {
            self.lift.y / weight
        } else {
            0.0
        }
    }
}

/// Forces for the current state.
///
/// Lift acts perpendicular to the velocity in the plane of the velocity and
/// the body up axis, drag opposes the velocity, side force opposes sideslip
/// and thrust acts along the nose. With invalid air data only thrust and
/// weight remain.
pub fn calculate_forces(
    aircraft: &AircraftConfig,
    air_data: &AirData,
    axes: &BodyAxes,
    velocity: &Vector3<f64>,
    controls: &ControlSurfaces,
    agl: f64,
    engine_available: bool,
    gravity: f64,
) -> ForceBreakdown {
    let thrust = if engine_available {
        axes.forward * (controls.throttle * aircraft.max_thrust)
    } else {
        Vector3::zeros()
    };
    let weight = Vector3::new(0.0, -aircraft.weight(gravity), 0.0);

    let mut forces = ForceBreakdown {
        lift: Vector3::zeros(),
        drag: Vector3::zeros(),
        side: Vector3::zeros(),
        thrust,
        weight,
        lift_coefficient: 0.0,
        drag_coefficient: 0.0,
        stalled: false,
    };

    if !air_data.valid || air_data.true_airspeed <= 0.0 {
        return forces;
    }

    let qs = air_data.dynamic_pressure * aircraft.geometry.wing_area;
    let flow = velocity / air_data.true_airspeed;

    let cl = lift_coefficient(air_data.alpha, controls.flaps, &aircraft.aero);
    let ground_effect = ground_effect_factor(agl, aircraft.geometry.wing_span);
    let cd = drag_coefficient(
        air_data.alpha,
        cl,
        controls.flaps,
        ground_effect,
        &aircraft.aero,
        &aircraft.geometry,
    );

    let lift_axis = axes.up - flow * axes.up.dot(&flow);
    let lift_axis_norm = lift_axis.norm();
    if lift_axis_norm > 1e-9 {
        forces.lift = lift_axis * (qs * cl / lift_axis_norm);
    }
    forces.drag = -flow * (qs * cd);
    forces.side = -axes.right * (qs * aircraft.aero.side_force_slope * air_data.beta);
    forces.lift_coefficient = cl;
    forces.drag_coefficient = cd;
    forces.stalled = is_stalled(air_data.alpha, &aircraft.aero);
    forces
}
