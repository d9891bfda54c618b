use bevy::prelude::*;

use super::integrator::{apply_velocity_limits, clamp_to_travel_limit, integrate_linear, integrate_rotation};
use super::rotation::{angular_accelerations, bank_turn_rate, rate_limits, ControlAuthority};
use crate::components::{AirData, AircraftConfig, AircraftState, ControlSurfaces, DamageState};
use crate::resources::{PhysicsConfig, TerrainHeightField};
use crate::systems::aerodynamics::{calculate_air_data, calculate_forces, lift_coefficient, ForceBreakdown};
use crate::utils::{deg_to_rad, TRAVEL_LIMIT_FRACTION};

/// Everything the rest of the tick needs from one dynamics step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicsReport {
    /// Air data at the start of the step.
    pub air_data: AirData,
    pub forces: ForceBreakdown,
    pub stalled: bool,
    /// (V - V_NE) / V_NE when positive, else zero.
    pub overspeed_severity: f64,
    /// Vertical lift over weight at the start of the step.
    pub lift_to_weight: f64,
    /// Height above terrain used for ground effect.
    pub agl: f64,
}

/// Integrates aircraft state from controls and aerodynamic forces.
#[derive(Debug, Clone)]
pub struct FlightDynamicsModel {
    aircraft: AircraftConfig,
    physics: PhysicsConfig,
    ground_control_factor: f64,
}

impl FlightDynamicsModel {
    pub fn new(aircraft: AircraftConfig, physics: PhysicsConfig, ground_control_factor: f64) -> Self {
        Self {
            aircraft,
            physics,
            ground_control_factor,
        }
    }

    pub fn aircraft(&self) -> &AircraftConfig {
        &self.aircraft
    }

    pub fn physics(&self) -> &PhysicsConfig {
        &self.physics
    }

    /// Advance `state` by `dt`. Controls are clamped and stored on the state.
    ///
    /// Callers are expected to pass a finite positive `dt`; anything else
    /// leaves the state untouched.
    pub fn step(
        &self,
        state: &mut AircraftState,
        controls: &ControlSurfaces,
        terrain: &TerrainHeightField,
        damage: &DamageState,
        grounded: bool,
        dt: f64,
    ) -> DynamicsReport {
        let controls = controls.clamped();
        state.controls = controls;

        let spatial = &state.spatial;
        let air_data = calculate_air_data(spatial, self.physics.air_density, self.physics.min_airspeed);
        let axes = spatial.attitude.body_axes();
        let agl = terrain.agl(&spatial.position);
        let forces = calculate_forces(
            &self.aircraft,
            &air_data,
            &axes,
            &spatial.velocity,
            &controls,
            agl,
            !damage.is_destroyed(),
            self.physics.gravity,
        );
        let stalled = air_data.valid && forces.stalled;
        let report = DynamicsReport {
            air_data,
            forces,
            stalled,
            overspeed_severity: overspeed_severity(air_data.true_airspeed, self.aircraft.never_exceed_speed),
            lift_to_weight: forces.lift_to_weight(),
            agl,
        };

        if !(dt.is_finite() && dt > 0.0) {
            return report;
        }

        let previous = state.spatial;
        let handling = &self.aircraft.handling;
        let ground_factor = if grounded { self.ground_control_factor } else { 1.0 };
        let authority = ControlAuthority::new(&air_data, damage.damage_fraction(), handling, ground_factor);
        let accelerations = angular_accelerations(
            &controls,
            &previous.attitude,
            &previous.angular_rates,
            &air_data,
            &authority,
            handling,
            grounded,
            stalled,
        );
        let turn_rate = if grounded {
            0.0
        } else {
            bank_turn_rate(&previous.attitude, &air_data, handling)
        };

        let spatial = &mut state.spatial;
        integrate_linear(spatial, &forces.net(), self.aircraft.mass, dt);
        integrate_rotation(spatial, &accelerations, &rate_limits(handling), turn_rate, dt);
        apply_velocity_limits(spatial, self.physics.max_velocity);
        clamp_to_travel_limit(spatial, terrain.half_extent() * TRAVEL_LIMIT_FRACTION);

        if !spatial.is_finite() {
            warn!("Non-finite aircraft state after dynamics step, restoring previous state");
            *spatial = previous;
            spatial.angular_rates = Default::default();
        }

        report
    }

    /// Angle of attack (rad) at which lift balances the weight component
    /// normal to a flight path of angle `flight_path_angle` at `airspeed`.
    /// Limited to the unstalled range.
    pub fn trim_angle_of_attack(&self, airspeed: f64, flight_path_angle: f64, flaps: f64) -> f64 {
        let aero = &self.aircraft.aero;
        let q = 0.5 * self.physics.air_density * airspeed * airspeed;
        if !(q > 0.0) {
            return 0.0;
        }
        let weight = self.aircraft.weight(self.physics.gravity) * flight_path_angle.cos();
        let required_cl = weight / (q * self.aircraft.geometry.wing_area);
        let base_cl = lift_coefficient(0.0, flaps, aero);
        let alpha_deg = ((required_cl - base_cl) / aero.lift_slope())
            .clamp(-aero.stall_angle, aero.stall_angle);
        deg_to_rad(alpha_deg)
    }
}

/// Fractional excess over the structural speed limit, zero when within it.
pub fn overspeed_severity(airspeed: f64, never_exceed_speed: f64) -> f64 {
    if !(airspeed.is_finite() && never_exceed_speed > 0.0) {
        return 0.0;
    }
    ((airspeed - never_exceed_speed) / never_exceed_speed).max(0.0)
}
