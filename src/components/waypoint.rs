use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::utils::{deg_to_rad, wrap_two_pi, ConfigError};

/// Check that `code` is exactly three ASCII uppercase letters.
pub fn validate_code(code: &str) -> Result<(), ConfigError> {
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(ConfigError::InvalidWaypointCode(code.to_string()))
    }
}

/// A destination runway. The threshold is the start of the paved surface and
/// the runway extends `length` metres from it along `headings[0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub code: String,
    pub name: String,
    /// Runway threshold in world coordinates [m].
    pub threshold: Vector3<f64>,
    /// Runway heading and its reciprocal (rad, clockwise from north).
    pub headings: [f64; 2],
    /// Paved width [m].
    pub width: f64,
    /// Paved length [m].
    pub length: f64,
}

impl Waypoint {
    pub fn new(
        code: &str,
        name: &str,
        threshold: Vector3<f64>,
        heading: f64,
        width: f64,
        length: f64,
    ) -> Result<Self, ConfigError> {
        validate_code(code)?;
        if !threshold.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::invalid("waypoint.threshold", "must be finite"));
        }
        if !(width > 0.0 && length > 0.0) {
            return Err(ConfigError::invalid(
                "waypoint.dimensions",
                format!("{code}: width and length must be positive"),
            ));
        }
        let heading = wrap_two_pi(heading);
        Ok(Self {
            code: code.to_string(),
            name: name.to_string(),
            threshold,
            headings: [heading, wrap_two_pi(heading + PI)],
            width,
            length,
        })
    }

    /// Same as [`Waypoint::new`] with the heading given in degrees.
    pub fn from_degrees(
        code: &str,
        name: &str,
        threshold: Vector3<f64>,
        heading_deg: f64,
        width: f64,
        length: f64,
    ) -> Result<Self, ConfigError> {
        Self::new(code, name, threshold, deg_to_rad(heading_deg), width, length)
    }

    pub fn elevation(&self) -> f64 {
        self.threshold.y
    }

    /// Position of (x, z) in runway coordinates: distance along the
    /// centreline from the threshold and lateral offset to the right.
    pub fn runway_coordinates(&self, x: f64, z: f64) -> (f64, f64) {
        let (sin_h, cos_h) = self.headings[0].sin_cos();
        let dx = x - self.threshold.x;
        let dz = z - self.threshold.z;
        let along = dx * sin_h + dz * cos_h;
        let across = dx * cos_h - dz * sin_h;
        (along, across)
    }

    /// Whether (x, z) lies on the paved surface.
    pub fn contains(&self, x: f64, z: f64) -> bool {
        let (along, across) = self.runway_coordinates(x, z);
        (0.0..=self.length).contains(&along) && across.abs() <= self.width / 2.0
    }
}

/// A rectangular area the aircraft should stay out of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProhibitedZone {
    pub code: String,
    pub name: String,
    /// Centre of the zone, (x, z) [m].
    pub center: [f64; 2],
    /// Full extent along x and z [m].
    pub dimensions: [f64; 2],
}

impl ProhibitedZone {
    pub fn contains(&self, x: f64, z: f64) -> bool {
        (x - self.center[0]).abs() <= self.dimensions[0] / 2.0
            && (z - self.center[1]).abs() <= self.dimensions[1] / 2.0
    }
}
