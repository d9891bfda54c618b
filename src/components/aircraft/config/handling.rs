use serde::{Deserialize, Serialize};

use crate::utils::ConfigError;

/// Rotational response of the airframe. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandlingQualities {
    /// Pitch acceleration at full elevator and full authority (deg/s²).
    pub pitch_authority: f64,
    /// Roll acceleration at full aileron (deg/s²).
    pub roll_authority: f64,
    /// Yaw acceleration at full rudder (deg/s²).
    pub yaw_authority: f64,
    /// Rate damping applied to all axes (1/s).
    pub rotation_damping: f64,
    /// Restoring roll acceleration per unit bank (1/s²).
    pub roll_stability: f64,
    /// Roll acceleration induced by full rudder (deg/s²).
    pub rudder_roll_effect: f64,
    /// Bank angle at which rudder stops inducing roll (deg).
    pub max_bank_angle: f64,
    /// Yaw rate produced by a 90 degree bank at reference speed (deg/s).
    pub bank_turn_rate: f64,
    /// Yaw acceleration per radian of sideslip (1/s²).
    pub weathercock_stability: f64,
    /// Nose-down pitch acceleration while stalled (deg/s²).
    pub stall_pitch_droop: f64,
    pub max_pitch_rate: f64,
    pub max_roll_rate: f64,
    pub max_yaw_rate: f64,
    /// Authority lost at zero integrity, applied as `1 - loss * damage²`.
    pub damage_authority_loss: f64,
}

impl HandlingQualities {
    pub fn cessna_172() -> Self {
        Self {
            pitch_authority: 20.0,
            roll_authority: 20.0,
            yaw_authority: 15.0,
            rotation_damping: 0.8,
            roll_stability: 0.1,
            rudder_roll_effect: 5.0,
            max_bank_angle: 30.0,
            bank_turn_rate: 10.0,
            weathercock_stability: 2.0,
            stall_pitch_droop: 5.0,
            max_pitch_rate: 25.0,
            max_roll_rate: 25.0,
            max_yaw_rate: 60.0,
            damage_authority_loss: 0.875,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = [
            ("aircraft.handling.max_bank_angle", self.max_bank_angle),
            ("aircraft.handling.max_pitch_rate", self.max_pitch_rate),
            ("aircraft.handling.max_roll_rate", self.max_roll_rate),
            ("aircraft.handling.max_yaw_rate", self.max_yaw_rate),
        ];
        for (field, value) in limits {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(field, format!("{value} must be positive")));
            }
        }
        let gains = [
            ("aircraft.handling.pitch_authority", self.pitch_authority),
            ("aircraft.handling.roll_authority", self.roll_authority),
            ("aircraft.handling.yaw_authority", self.yaw_authority),
            ("aircraft.handling.rotation_damping", self.rotation_damping),
            ("aircraft.handling.roll_stability", self.roll_stability),
            ("aircraft.handling.rudder_roll_effect", self.rudder_roll_effect),
            ("aircraft.handling.bank_turn_rate", self.bank_turn_rate),
            ("aircraft.handling.weathercock_stability", self.weathercock_stability),
            ("aircraft.handling.stall_pitch_droop", self.stall_pitch_droop),
        ];
        for (field, value) in gains {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::invalid(field, format!("{value} must be non-negative")));
            }
        }
        if !(0.0..=1.0).contains(&self.damage_authority_loss) {
            return Err(ConfigError::invalid(
                "aircraft.handling.damage_authority_loss",
                "must be within [0, 1]",
            ));
        }
        Ok(())
    }
}
