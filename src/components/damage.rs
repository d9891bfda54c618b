use serde::{Deserialize, Serialize};

use crate::utils::MAX_INTEGRITY;

/// Outcome of applying damage to the airframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSignal {
    /// Integrity is still above zero, or was already zero before this call.
    None,
    /// Integrity reached zero on this call.
    Destroyed,
}

/// Structural integrity of the airframe, 100 is pristine.
///
/// Integrity never increases except through [`DamageState::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageState {
    integrity: f64,
}

impl Default for DamageState {
    fn default() -> Self {
        Self {
            integrity: MAX_INTEGRITY,
        }
    }
}

impl DamageState {
    pub fn integrity(&self) -> f64 {
        self.integrity
    }

    /// Damage as a fraction in [0, 1].
    pub fn damage_fraction(&self) -> f64 {
        1.0 - self.integrity / MAX_INTEGRITY
    }

    pub fn is_destroyed(&self) -> bool {
        self.integrity <= 0.0
    }

    /// Remove `amount` integrity. Negative or non-finite amounts are ignored.
    pub fn reduce(&mut self, amount: f64) -> DamageSignal {
        if self.is_destroyed() || !(amount.is_finite() && amount > 0.0) {
            return DamageSignal::None;
        }
        self.integrity = (self.integrity - amount).max(0.0);
        if self.is_destroyed() {
            DamageSignal::Destroyed
        } else {
            DamageSignal::None
        }
    }

    /// Drop integrity straight to zero.
    pub fn destroy(&mut self) -> DamageSignal {
        let amount = self.integrity;
        self.reduce(amount)
    }

    pub fn reset(&mut self) {
        self.integrity = MAX_INTEGRITY;
    }
}
