use serde::{Deserialize, Serialize};

use super::{AeroCoefficients, AircraftGeometry, HandlingQualities};
use crate::utils::ConfigError;

/// Complete description of a simulated airframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    pub name: String,
    /// Total mass of the aircraft (kg).
    pub mass: f64,
    /// Static thrust at full throttle (N).
    pub max_thrust: f64,
    /// Structural speed limit, V_NE (m/s).
    pub never_exceed_speed: f64,
    pub geometry: AircraftGeometry,
    pub aero: AeroCoefficients,
    pub handling: HandlingQualities,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self::cessna_172()
    }
}

impl AircraftConfig {
    pub fn cessna_172() -> Self {
        Self {
            name: "Cessna 172".to_string(),
            mass: 850.0,
            max_thrust: 1800.0,
            never_exceed_speed: 82.31,
            geometry: AircraftGeometry::cessna_172(),
            aero: AeroCoefficients::cessna_172(),
            handling: HandlingQualities::cessna_172(),
        }
    }

    pub fn weight(&self, gravity: f64) -> f64 {
        self.mass * gravity
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("aircraft.mass", self.mass),
            ("aircraft.never_exceed_speed", self.never_exceed_speed),
            ("aircraft.geometry.wing_area", self.geometry.wing_area),
            ("aircraft.geometry.wing_span", self.geometry.wing_span),
            ("aircraft.geometry.aspect_ratio", self.geometry.aspect_ratio),
            (
                "aircraft.geometry.oswald_efficiency",
                self.geometry.oswald_efficiency,
            ),
            ("aircraft.aero.stall_angle", self.aero.stall_angle),
            (
                "aircraft.aero.max_drag_coefficient",
                self.aero.max_drag_coefficient,
            ),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(field, format!("{value} must be positive")));
            }
        }
        if !(self.max_thrust.is_finite() && self.max_thrust >= 0.0) {
            return Err(ConfigError::invalid(
                "aircraft.max_thrust",
                "must be finite and non-negative",
            ));
        }
        if self.aero.cl_max <= self.aero.cl0 {
            return Err(ConfigError::invalid(
                "aircraft.aero.cl_max",
                format!("{} must exceed cl0 {}", self.aero.cl_max, self.aero.cl0),
            ));
        }
        if self.aero.stall_angle >= 90.0 {
            return Err(ConfigError::invalid(
                "aircraft.aero.stall_angle",
                "must be below 90 degrees",
            ));
        }
        self.handling.validate()
    }
}
