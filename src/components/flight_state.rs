use serde::{Deserialize, Serialize};

use crate::utils::StateError;

/// Exclusive flight mode. Stall and overspeed are tracked as separate flags
/// on [`FlightStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightMode {
    Airborne,
    Grounded,
    Destroyed,
}

impl FlightMode {
    /// Whether `self -> to` is one of the legal transitions. Staying in the
    /// same mode is always allowed.
    pub fn can_transition_to(self, to: FlightMode) -> bool {
        use FlightMode::*;
        matches!(
            (self, to),
            (Airborne, Grounded) | (Grounded, Airborne) | (Airborne, Destroyed) | (Grounded, Destroyed)
        ) || self == to
    }

    pub fn is_terminal(self) -> bool {
        self == FlightMode::Destroyed
    }
}

/// What ended the flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CrashCause {
    /// A single contact exceeded the destruction threshold.
    Impact { severity: f64 },
    /// Accumulated damage brought integrity to zero.
    StructuralFailure,
}

/// Discrete flight status plus the orthogonal warning flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightStatus {
    pub mode: FlightMode,
    pub stall_warning: bool,
    pub overspeed_warning: bool,
    pub crash_cause: Option<CrashCause>,
}

impl FlightStatus {
    pub fn new(mode: FlightMode) -> Self {
        Self {
            mode,
            stall_warning: false,
            overspeed_warning: false,
            crash_cause: None,
        }
    }

    /// Move to `to`. Returns `Ok(true)` if the mode changed and `Ok(false)` for
    /// a self-transition.
    pub fn try_transition(&mut self, to: FlightMode) -> Result<bool, StateError> {
        if !self.mode.can_transition_to(to) {
            return Err(StateError::InvalidTransition {
                from: self.mode,
                to,
            });
        }
        let changed = self.mode != to;
        self.mode = to;
        Ok(changed)
    }

    pub fn is_destroyed(&self) -> bool {
        self.mode.is_terminal()
    }
}
