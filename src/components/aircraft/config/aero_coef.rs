use serde::{Deserialize, Serialize};

/// Lift and drag model coefficients. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroCoefficients {
    /// Lift coefficient at zero angle of attack.
    pub cl0: f64,
    /// Peak lift coefficient, reached at the stall angle.
    pub cl_max: f64,
    /// Stall angle of attack (deg).
    pub stall_angle: f64,
    /// Fraction of `cl_max` lost per degree beyond the stall angle.
    pub post_stall_lift_decay: f64,
    /// Lift coefficient magnitude left in a deep stall.
    pub residual_lift_coefficient: f64,
    /// Zero-lift drag coefficient.
    pub cd_min: f64,
    /// Profile drag growth per degree of angle of attack.
    pub cd_slope: f64,
    /// Drag growth per squared degree beyond the stall angle.
    pub stall_drag_factor: f64,
    /// Upper bound on the total drag coefficient.
    pub max_drag_coefficient: f64,
    /// Lift coefficient added at full flap.
    pub flap_lift_offset: f64,
    /// Drag coefficient added at full flap (scaled by flap²).
    pub flap_drag_coefficient: f64,
    /// Side force coefficient per radian of sideslip.
    pub side_force_slope: f64,
}

impl AeroCoefficients {
    pub fn cessna_172() -> Self {
        Self {
            cl0: 0.25,
            cl_max: 1.2,
            stall_angle: 15.0,
            post_stall_lift_decay: 0.25,
            residual_lift_coefficient: 0.125,
            cd_min: 0.03,
            cd_slope: 0.0015,
            stall_drag_factor: 0.004,
            max_drag_coefficient: 1.0,
            flap_lift_offset: 0.35,
            flap_drag_coefficient: 0.06,
            side_force_slope: 1.0,
        }
    }

    /// Pre-stall lift curve slope (per degree).
    pub fn lift_slope(&self) -> f64 {
        (self.cl_max - self.cl0) / self.stall_angle
    }
}
