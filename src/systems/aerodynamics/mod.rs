mod air_data;
mod coefficients;
mod force_calculator;

pub use air_data::calculate_air_data;
pub use coefficients::{drag_coefficient, ground_effect_factor, is_stalled, lift_coefficient};
pub use force_calculator::{calculate_forces, ForceBreakdown};
