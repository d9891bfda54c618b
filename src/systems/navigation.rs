use serde::{Deserialize, Serialize};

use crate::components::{AircraftState, Waypoint};
use crate::resources::NavigationConfig;
use crate::utils::{deg_to_rad, heading_of, horizontal_norm, wrap_pi};

/// Guidance towards the selected waypoint, recomputed every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guidance {
    pub waypoint: String,
    /// Bearing to the threshold, [0, 2π) clockwise from north.
    pub bearing: f64,
    /// Planar distance to the threshold (m).
    pub distance: f64,
    /// Time to the threshold at the current ground speed (s), `None` when
    /// the aircraft is not moving.
    pub eta: Option<f64>,
    pub is_near_destination: bool,
    /// Height above the glideslope (m, positive high). Only set near the
    /// destination.
    pub glideslope_deviation: Option<f64>,
    /// Bearing minus heading, (−π, π].
    pub relative_bearing: f64,
    /// Direction of horizontal motion, `None` when stationary.
    pub ground_track: Option<f64>,
    /// Runway heading pair, only set near the destination.
    pub runway_headings: Option<[f64; 2]>,
}

#[derive(Debug, Clone)]
pub struct NavigationComputer {
    config: NavigationConfig,
}

impl NavigationComputer {
    pub fn new(config: NavigationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn compute_guidance(&self, aircraft: &AircraftState, waypoint: &Waypoint) -> Guidance {
        let position = aircraft.spatial.position;
        let dx = waypoint.threshold.x - position.x;
        let dz = waypoint.threshold.z - position.z;
        let distance = dx.hypot(dz);
        let bearing = if distance > f64::EPSILON {
            heading_of(dx, dz)
        } else {
            0.0
        };

        let ground_speed = horizontal_norm(&aircraft.spatial.velocity);
        let moving = ground_speed >= self.config.min_eta_ground_speed;
        let eta = moving.then(|| distance / ground_speed);
        let ground_track = moving.then(|| {
            heading_of(aircraft.spatial.velocity.x, aircraft.spatial.velocity.z)
        });

        let is_near_destination = self.is_near(distance);
        let glideslope_deviation = is_near_destination.then(|| {
            self.glideslope_deviation(position.y - waypoint.elevation(), distance)
        });

        Guidance {
            waypoint: waypoint.code.clone(),
            bearing,
            distance,
            eta,
            is_near_destination,
            glideslope_deviation,
            relative_bearing: wrap_pi(bearing - aircraft.spatial.attitude.yaw),
            ground_track,
            runway_headings: is_near_destination.then_some(waypoint.headings),
        }
    }

    pub fn is_near(&self, distance: f64) -> bool {
        distance < self.config.proximity_radius
    }

    /// Height above the threshold minus the glideslope height at `distance`.
    pub fn glideslope_deviation(&self, height_above_threshold: f64, distance: f64) -> f64 {
        height_above_threshold - distance * deg_to_rad(self.config.glideslope_angle).tan()
    }
}
