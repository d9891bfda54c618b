use serde::{Deserialize, Serialize};

use crate::utils::clamp_or;

/// Pilot control vector applied for a tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlSurfaces {
    /// Throttle setting in [0, 1].
    pub throttle: f64,
    /// Flap deployment in [0, 1].
    pub flaps: f64,
    /// Rudder deflection in [-1, 1], positive yaws right.
    pub rudder: f64,
    /// Elevator deflection in [-1, 1], positive pitches nose-up.
    pub elevator: f64,
    /// Aileron deflection in [-1, 1], positive rolls right.
    pub aileron: f64,
    pub brakes: bool,
}

impl ControlSurfaces {
    pub fn new(throttle: f64, flaps: f64, rudder: f64, elevator: f64, aileron: f64) -> Self {
        Self {
            throttle,
            flaps,
            rudder,
            elevator,
            aileron,
            brakes: false,
        }
    }

    /// Only throttle set, all surfaces neutral.
    pub fn with_throttle(throttle: f64) -> Self {
        Self {
            throttle,
            ..Default::default()
        }
    }

    /// Copy with every axis clamped to its domain. NaN maps to neutral.
    pub fn clamped(&self) -> Self {
        Self {
            throttle: clamp_or(self.throttle, 0.0, 1.0, 0.0),
            flaps: clamp_or(self.flaps, 0.0, 1.0, 0.0),
            rudder: clamp_or(self.rudder, -1.0, 1.0, 0.0),
            elevator: clamp_or(self.elevator, -1.0, 1.0, 0.0),
            aileron: clamp_or(self.aileron, -1.0, 1.0, 0.0),
            brakes: self.brakes,
        }
    }

    pub fn is_within_limits(&self) -> bool {
        (0.0..=1.0).contains(&self.throttle)
            && (0.0..=1.0).contains(&self.flaps)
            && (-1.0..=1.0).contains(&self.rudder)
            && (-1.0..=1.0).contains(&self.elevator)
            && (-1.0..=1.0).contains(&self.aileron)
    }
}
