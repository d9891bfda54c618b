//! Conversions between SI and the units shown on light-aircraft instruments.

pub const METRES_PER_SECOND_TO_KNOTS: f64 = 1.943_844;
pub const METRES_TO_FEET: f64 = 3.280_84;

#[inline]
pub fn mps_to_knots(speed: f64) -> f64 {
    speed * METRES_PER_SECOND_TO_KNOTS
}

#[inline]
pub fn knots_to_mps(speed: f64) -> f64 {
    speed / METRES_PER_SECOND_TO_KNOTS
}

#[inline]
pub fn metres_to_feet(length: f64) -> f64 {
    length * METRES_TO_FEET
}

/// Vertical speed in feet per minute
#[inline]
pub fn mps_to_fpm(vertical_speed: f64) -> f64 {
    vertical_speed * METRES_TO_FEET * 60.0
}
