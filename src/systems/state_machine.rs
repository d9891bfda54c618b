use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::collisions::{ContactOutcome, LandingQuality, SurfaceType};
use crate::components::{CrashCause, DamageState, FlightMode, FlightStatus};

/// Discrete things that happened during a tick.
#[derive(Event, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FlightEvent {
    Touchdown {
        quality: LandingQuality,
        severity: f64,
        surface: SurfaceType,
    },
    Liftoff,
    Destroyed {
        cause: CrashCause,
    },
}

/// Derives the next [`FlightStatus`] from the outcome of a tick.
///
/// Only `Airborne <-> Grounded` and `{Airborne, Grounded} -> Destroyed` are
/// ever requested. A destroyed status is left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlightStateMachine;

impl FlightStateMachine {
    pub fn update(
        &self,
        status: &mut FlightStatus,
        contact: &ContactOutcome,
        damage: &DamageState,
        stalled: bool,
        overspeed: bool,
    ) -> Vec<FlightEvent> {
        let mut events = Vec::new();
        if status.is_destroyed() {
            return events;
        }

        status.stall_warning = stalled;
        status.overspeed_warning = overspeed;

        match contact {
            ContactOutcome::Touchdown(touchdown) => {
                events.push(FlightEvent::Touchdown {
                    quality: touchdown.quality,
                    severity: touchdown.severity,
                    surface: touchdown.surface,
                });
                if touchdown.quality == LandingQuality::Crash {
                    let cause = CrashCause::Impact {
                        severity: touchdown.severity,
                    };
                    Self::destroy(status, cause, &mut events);
                    return events;
                }
                Self::transition(status, FlightMode::Grounded);
            }
            ContactOutcome::Liftoff => {
                if Self::transition(status, FlightMode::Airborne) {
                    events.push(FlightEvent::Liftoff);
                }
            }
            ContactOutcome::Clear | ContactOutcome::Rolling => {}
        }

        if damage.is_destroyed() {
            Self::destroy(status, CrashCause::StructuralFailure, &mut events);
        }
        events
    }

    fn destroy(status: &mut FlightStatus, cause: CrashCause, events: &mut Vec<FlightEvent>) {
        if Self::transition(status, FlightMode::Destroyed) {
            status.crash_cause = Some(cause);
            events.push(FlightEvent::Destroyed { cause });
        }
    }

    fn transition(status: &mut FlightStatus, to: FlightMode) -> bool {
        match status.try_transition(to) {
            Ok(changed) => changed,
            Err(err) => {
                warn!("Rejected flight mode change: {err}");
                false
            }
        }
    }
}
