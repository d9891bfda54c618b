use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::{GroundSample, SurfaceType};
use crate::components::{AircraftState, FlightMode};
use crate::resources::GroundConfig;
use crate::utils::{deg_to_rad, horizontal_norm, rad_to_deg, wrap_pi};

/// Grade of a touchdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandingQuality {
    /// Below the soft landing threshold, no damage.
    Good,
    /// Survivable, damages the airframe.
    Hard,
    /// At or above the destruction threshold.
    Crash,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Touchdown {
    pub severity: f64,
    pub quality: LandingQuality,
    pub surface: SurfaceType,
    /// Speed into the surface at contact (m/s).
    pub sink_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactOutcome {
    /// Airborne and above the ground.
    Clear,
    /// First contact this tick.
    Touchdown(Touchdown),
    /// Grounded and staying on the ground.
    Rolling,
    /// Grounded aircraft left the ground this tick.
    Liftoff,
}

/// Speed of `velocity` into a surface with slope `gradient` (dh/dx, dh/dz),
/// along the surface normal. Zero when moving away from the surface.
pub fn contact_sink_rate(velocity: &Vector3<f64>, gradient: (f64, f64)) -> f64 {
    let (gx, gz) = gradient;
    let into_surface = velocity.x * gx + velocity.z * gz - velocity.y;
    (into_surface / (1.0 + gx * gx + gz * gz).sqrt()).max(0.0)
}

/// Detects and resolves contact between the aircraft and the ground.
#[derive(Debug, Clone)]
pub struct GroundContactResolver {
    config: GroundConfig,
    gravity: f64,
}

impl GroundContactResolver {
    pub fn new(config: GroundConfig, gravity: f64) -> Self {
        Self { config, gravity }
    }

    pub fn config(&self) -> &GroundConfig {
        &self.config
    }

    /// Severity of a contact with the aircraft in `state`. Sink rate into
    /// the sloped surface dominates, with smaller terms for excess ground
    /// speed, bank, nose-down pitch, crab and surface.
    pub fn impact_severity(&self, state: &AircraftState, ground: &GroundSample) -> f64 {
        let cfg = &self.config;
        let spatial = &state.spatial;
        let sink_rate = contact_sink_rate(&spatial.velocity, ground.gradient);
        let ground_speed = horizontal_norm(&spatial.velocity);
        let roll = rad_to_deg(spatial.attitude.roll).abs();
        let nose_down = (-rad_to_deg(spatial.attitude.pitch)).max(0.0);
        let crab = if ground_speed > 1.0 {
            let track = spatial.velocity.x.atan2(spatial.velocity.z);
            rad_to_deg(wrap_pi(track - spatial.attitude.yaw)).abs()
        } else {
            0.0
        };
        let surface_penalty = match ground.surface {
            SurfaceType::Runway => 0.0,
            SurfaceType::Terrain => cfg.off_runway_penalty,
            SurfaceType::Water => cfg.water_penalty,
        };

        sink_rate
            + cfg.horizontal_severity_factor * (ground_speed - cfg.safe_touchdown_speed).max(0.0)
            + cfg.roll_severity_factor * roll
            + cfg.pitch_severity_factor * nose_down
            + cfg.crab_severity_factor * crab
            + surface_penalty
    }

    pub fn grade(&self, severity: f64) -> LandingQuality {
        if severity >= self.config.destruction_threshold {
            LandingQuality::Crash
        } else if severity >= self.config.soft_landing_threshold {
            LandingQuality::Hard
        } else {
            LandingQuality::Good
        }
    }

    /// Resolve contact after an integration step.
    ///
    /// `lift_to_weight` is the ratio computed for this tick; a grounded
    /// aircraft only lifts off when it exceeds 1 and the integrated vertical
    /// velocity is upward.
    pub fn resolve(
        &self,
        state: &mut AircraftState,
        mode: FlightMode,
        ground: &GroundSample,
        lift_to_weight: f64,
        dt: f64,
    ) -> ContactOutcome {
        let agl = state.spatial.position.y - ground.height;
        match mode {
            FlightMode::Destroyed => ContactOutcome::Clear,
            FlightMode::Airborne if agl > 0.0 => ContactOutcome::Clear,
            FlightMode::Airborne => {
                let severity = self.impact_severity(state, ground);
                let touchdown = Touchdown {
                    severity,
                    quality: self.grade(severity),
                    surface: ground.surface,
                    sink_rate: contact_sink_rate(&state.spatial.velocity, ground.gradient),
                };
                self.settle(state, ground.height);
                ContactOutcome::Touchdown(touchdown)
            }
            FlightMode::Grounded => {
                if lift_to_weight > 1.0 && state.spatial.velocity.y > 0.0 {
                    return ContactOutcome::Liftoff;
                }
                self.settle(state, ground.height);
                self.apply_ground_roll(state, ground.gradient, lift_to_weight, dt);
                ContactOutcome::Rolling
            }
        }
    }

    /// Put the wheels on the ground: clamp height, drop sink, level the wings
    /// and keep pitch inside the ground rotation range.
    fn settle(&self, state: &mut AircraftState, ground_height: f64) {
        let spatial = &mut state.spatial;
        spatial.position.y = ground_height;
        spatial.velocity.y = 0.0;
        spatial.attitude.roll = 0.0;
        spatial.angular_rates.roll = 0.0;

        let max_pitch = deg_to_rad(self.config.max_ground_pitch);
        if spatial.attitude.pitch <= 0.0 {
            spatial.attitude.pitch = 0.0;
            spatial.angular_rates.pitch = spatial.angular_rates.pitch.max(0.0);
        } else if spatial.attitude.pitch >= max_pitch {
            spatial.attitude.pitch = max_pitch;
            spatial.angular_rates.pitch = spatial.angular_rates.pitch.min(0.0);
        }
    }

    /// Slope gravity, rolling friction and brakes, with the tyres holding
    /// the ground track on the heading. Friction never reverses the
    /// direction of travel and holds the aircraft on slopes it can grip.
    fn apply_ground_roll(
        &self,
        state: &mut AircraftState,
        gradient: (f64, f64),
        lift_to_weight: f64,
        dt: f64,
    ) {
        let mu = if state.controls.brakes {
            self.config.brake_friction
        } else {
            self.config.rolling_friction
        };
        let spatial = &mut state.spatial;
        let (sin_h, cos_h) = spatial.attitude.yaw.sin_cos();
        let along = spatial.velocity.x * sin_h + spatial.velocity.z * cos_h;
        let direction = if along < 0.0 { -1.0 } else { 1.0 };
        let speed = direction * horizontal_norm(&spatial.velocity);

        // Rise per metre travelled along the heading
        let slope = gradient.0 * sin_h + gradient.1 * cos_h;
        let slope_acceleration = -self.gravity * slope / (1.0 + slope * slope).sqrt();
        let free_speed = speed + slope_acceleration * dt;

        let friction = mu * self.gravity * (1.0 - lift_to_weight).max(0.0) * dt;
        let new_speed = if free_speed.abs() <= friction {
            0.0
        } else {
            free_speed - friction * free_speed.signum()
        };

        spatial.velocity.x = new_speed * sin_h;
        spatial.velocity.z = new_speed * cos_h;
    }
}
