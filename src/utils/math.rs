use nalgebra::Vector3;
use std::f64::consts::{PI, TAU};

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_two_pi(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an angle into (-π, π]
#[inline]
pub fn wrap_pi(angle: f64) -> f64 {
    let wrapped = wrap_two_pi(angle);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Heading of a horizontal vector, clockwise from north (+Z), in [0, 2π)
#[inline]
pub fn heading_of(dx: f64, dz: f64) -> f64 {
    wrap_two_pi(dx.atan2(dz))
}

/// Horizontal (XZ) magnitude of a world vector
#[inline]
pub fn horizontal_norm(v: &Vector3<f64>) -> f64 {
    v.x.hypot(v.z)
}

/// Linearly remap `value` from [in_min, in_max] to [out_min, out_max]
#[inline]
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Clamp to [min, max], mapping NaN to `fallback`
#[inline]
pub fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
