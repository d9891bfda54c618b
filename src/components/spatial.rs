use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Euler attitude. Pitch is positive nose-up, roll positive right-wing-down and
/// yaw is the heading, clockwise from north (+Z).
///
/// Pitch is kept within ±89°, so attitudes through the vertical (loops) cannot
/// be represented.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Attitude {
    /// Pitch angle (rad).
    pub pitch: f64,
    /// Roll angle (rad), in (-π, π].
    pub roll: f64,
    /// Yaw / heading angle (rad), in [0, 2π).
    pub yaw: f64,
}

/// Body rotation rates about the Euler axes (rad/s).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AngularRates {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

/// Body axes expressed in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyAxes {
    pub forward: Vector3<f64>,
    pub right: Vector3<f64>,
    pub up: Vector3<f64>,
}

impl Attitude {
    pub fn new(pitch: f64, roll: f64, yaw: f64) -> Self {
        Self { pitch, roll, yaw }
    }

    /// Wings-level attitude pointing along `heading`.
    pub fn level(heading: f64) -> Self {
        Self::new(0.0, 0.0, heading)
    }

    pub fn is_finite(&self) -> bool {
        self.pitch.is_finite() && self.roll.is_finite() && self.yaw.is_finite()
    }

    pub fn forward(&self) -> Vector3<f64> {
        let (sp, cp) = self.pitch.sin_cos();
        let (sy, cy) = self.yaw.sin_cos();
        Vector3::new(sy * cp, sp, cy * cp)
    }

    /// Body axes in world coordinates (X east, Y up, Z north).
    pub fn body_axes(&self) -> BodyAxes {
        let (sp, cp) = self.pitch.sin_cos();
        let (sy, cy) = self.yaw.sin_cos();
        let (sr, cr) = self.roll.sin_cos();

        let forward = Vector3::new(sy * cp, sp, cy * cp);
        let level_right = Vector3::new(cy, 0.0, -sy);
        let level_up = Vector3::new(-sy * sp, cp, -cy * sp);

        // Positive roll lowers the right wing
        BodyAxes {
            forward,
            right: level_right * cr - level_up * sr,
            up: level_up * cr + level_right * sr,
        }
    }
}

impl AngularRates {
    pub fn new(pitch: f64, roll: f64, yaw: f64) -> Self {
        Self { pitch, roll, yaw }
    }

    pub fn is_finite(&self) -> bool {
        self.pitch.is_finite() && self.roll.is_finite() && self.yaw.is_finite()
    }
}

/// Kinematic state of a rigid body in the world frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space [m], Y is altitude MSL
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    pub attitude: Attitude,

    pub angular_rates: AngularRates,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: Attitude::default(),
            angular_rates: AngularRates::default(),
        }
    }
}

impl SpatialComponent {
    /// Create a new spatial component with initial values
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: Attitude,
        angular_rates: AngularRates,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_rates,
        }
    }

    /// Create a new spatial component at a specific position
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|v| v.is_finite())
            && self.velocity.iter().all(|v| v.is_finite())
            && self.attitude.is_finite()
            && self.angular_rates.is_finite()
    }

    /// Horizontal speed over the ground (m/s)
    pub fn ground_speed(&self) -> f64 {
        self.velocity.x.hypot(self.velocity.z)
    }
}
