use crate::components::{AirData, AngularRates, Attitude, ControlSurfaces, HandlingQualities};
use crate::utils::{deg_to_rad, CONTROL_REFERENCE_SPEED};

/// Inputs that scale control response for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlAuthority {
    /// clamp((V / V_ref)², 0, 1), zero when air data is invalid.
    pub speed: f64,
    /// 1 - loss · damage².
    pub damage: f64,
    /// Ground control factor, or 1 when airborne.
    pub ground: f64,
}

impl ControlAuthority {
    pub fn new(air_data: &AirData, damage_fraction: f64, handling: &HandlingQualities, ground: f64) -> Self {
        Self {
            speed: speed_authority(air_data),
            damage: damage_authority(damage_fraction, handling),
            ground,
        }
    }

    pub fn total(&self) -> f64 {
        self.speed * self.damage * self.ground
    }
}

pub fn speed_authority(air_data: &AirData) -> f64 {
    if !air_data.valid {
        return 0.0;
    }
    (air_data.true_airspeed / CONTROL_REFERENCE_SPEED).powi(2).clamp(0.0, 1.0)
}

pub fn damage_authority(damage_fraction: f64, handling: &HandlingQualities) -> f64 {
    let damage = damage_fraction.clamp(0.0, 1.0);
    (1.0 - handling.damage_authority_loss * damage * damage).max(0.0)
}

/// Angular accelerations (rad/s²) from control deflection, damping and the
/// airframe's natural tendencies.
pub fn angular_accelerations(
    controls: &ControlSurfaces,
    attitude: &Attitude,
    rates: &AngularRates,
    air_data: &AirData,
    authority: &ControlAuthority,
    handling: &HandlingQualities,
    grounded: bool,
    stalled: bool,
) -> AngularRates {
    let gain = authority.total();
    let damping = handling.rotation_damping;

    let mut pitch = controls.elevator * deg_to_rad(handling.pitch_authority) * gain
        - damping * rates.pitch;
    if stalled && !grounded {
        pitch -= deg_to_rad(handling.stall_pitch_droop);
    }

    let mut roll = -damping * rates.roll - handling.roll_stability * attitude.roll;
    let mut yaw = controls.rudder * deg_to_rad(handling.yaw_authority) * gain - damping * rates.yaw;

    if !grounded {
        roll += controls.aileron * deg_to_rad(handling.roll_authority) * gain;
        // Rudder rolls the aircraft until the bank limit
        let bank_factor = (1.0 - attitude.roll.abs() / deg_to_rad(handling.max_bank_angle)).max(0.0);
        roll += controls.rudder * deg_to_rad(handling.rudder_roll_effect) * gain * bank_factor;
        yaw += handling.weathercock_stability * air_data.beta * authority.speed;
    }

    AngularRates { pitch, roll, yaw }
}

/// Heading change produced by bank (rad/s).
pub fn bank_turn_rate(attitude: &Attitude, air_data: &AirData, handling: &HandlingQualities) -> f64 {
    if !air_data.valid {
        return 0.0;
    }
    let speed_factor = (air_data.true_airspeed / CONTROL_REFERENCE_SPEED).clamp(0.0, 1.0);
    attitude.roll.sin() * speed_factor * deg_to_rad(handling.bank_turn_rate)
}

pub fn rate_limits(handling: &HandlingQualities) -> AngularRates {
    AngularRates {
        pitch: deg_to_rad(handling.max_pitch_rate),
        roll: deg_to_rad(handling.max_roll_rate),
        yaw: deg_to_rad(handling.max_yaw_rate),
    }
}
