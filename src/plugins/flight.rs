use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{ControlSurfaces, FlightMode};
use crate::resources::{FlightSession, SpawnPoint};
use crate::systems::{FlightEvent, Guidance};
use crate::utils::{metres_to_feet, mps_to_fpm, mps_to_knots, rad_to_deg};

/// Flight simulation stages, run in order every fixed step.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    /// Resets and waypoint selection, applied between ticks.
    Reset,
    Simulate,
    Readout,
}

/// Controls to apply on the next tick, written by input collaborators.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlInput(pub ControlSurfaces);

/// Request to discard the current flight. `None` restarts at the last spawn.
#[derive(Event, Debug, Clone, Copy)]
pub struct ResetFlight {
    pub spawn: Option<SpawnPoint>,
}

/// Request to change the selected waypoint. `None` cycles to the next one.
#[derive(Event, Debug, Clone)]
pub struct SelectWaypoint {
    pub code: Option<String>,
}

/// Instrument view of the flight, refreshed after every tick.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FlightReadout {
    pub mode: FlightMode,
    pub stall_warning: bool,
    pub overspeed_warning: bool,
    pub integrity: f64,
    pub position: Vector3<f64>,
    pub airspeed: f64,
    pub airspeed_knots: f64,
    pub altitude: f64,
    pub altitude_feet: f64,
    pub agl: f64,
    pub agl_feet: f64,
    pub vertical_speed: f64,
    pub vertical_speed_fpm: f64,
    /// Heading (deg).
    pub heading: f64,
    /// Pitch and roll (deg).
    pub pitch: f64,
    pub roll: f64,
    pub throttle: f64,
    pub flaps: f64,
    pub brakes: bool,
    pub guidance: Guidance,
    pub zone: Option<String>,
}

impl FlightReadout {
    pub fn from_session(session: &FlightSession) -> Self {
        let report = session.snapshot();
        let aircraft = session.aircraft();
        let spatial = &aircraft.spatial;
        let airspeed = report.air_data.true_airspeed;

        Self {
            mode: report.mode,
            stall_warning: report.stall_warning,
            overspeed_warning: report.overspeed_warning,
            integrity: report.integrity,
            position: spatial.position,
            airspeed,
            airspeed_knots: mps_to_knots(airspeed),
            altitude: spatial.position.y,
            altitude_feet: metres_to_feet(spatial.position.y),
            agl: report.agl,
            agl_feet: metres_to_feet(report.agl),
            vertical_speed: spatial.velocity.y,
            vertical_speed_fpm: mps_to_fpm(spatial.velocity.y),
            heading: rad_to_deg(spatial.attitude.yaw),
            pitch: rad_to_deg(spatial.attitude.pitch),
            roll: rad_to_deg(spatial.attitude.roll),
            throttle: aircraft.controls.throttle,
            flaps: aircraft.controls.flaps,
            brakes: aircraft.controls.brakes,
            guidance: report.guidance,
            zone: report.zone,
        }
    }
}

/// Runs a [`FlightSession`] on the fixed timestep.
pub struct FlightPlugin {
    pub session: FlightSession,
}

impl FlightPlugin {
    pub fn new(session: FlightSession) -> Self {
        Self { session }
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        let timestep = self.session.config().physics.timestep;

        app.insert_resource(self.session.clone())
            .insert_resource(FlightReadout::from_session(&self.session))
            .init_resource::<ControlInput>();

        app.add_event::<ResetFlight>()
            .add_event::<SelectWaypoint>()
            .add_event::<FlightEvent>();

        app.insert_resource(Time::<Fixed>::from_seconds(timestep));

        app.configure_sets(
            FixedUpdate,
            (FlightSet::Reset, FlightSet::Simulate, FlightSet::Readout).chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                (handle_reset_requests, handle_waypoint_selection).in_set(FlightSet::Reset),
                simulate_flight.in_set(FlightSet::Simulate),
                update_readout.in_set(FlightSet::Readout),
            ),
        );
    }
}

pub fn handle_reset_requests(
    mut requests: EventReader<ResetFlight>,
    mut session: ResMut<FlightSession>,
    mut controls: ResMut<ControlInput>,
) {
    for request in requests.read() {
        match request.spawn {
            Some(spawn) => session.reset(spawn),
            None => session.restart(),
        }
        *controls = ControlInput::default();
    }
}

pub fn handle_waypoint_selection(
    mut requests: EventReader<SelectWaypoint>,
    mut session: ResMut<FlightSession>,
) {
    for request in requests.read() {
        match &request.code {
            Some(code) => {
                if session.select_waypoint(code).is_none() {
                    warn!("Unknown waypoint {code}");
                }
            }
            None => {
                let code = session.cycle_waypoint().code.clone();
                info!("Selected waypoint {code}");
            }
        }
    }
}

pub fn simulate_flight(
    controls: Res<ControlInput>,
    mut session: ResMut<FlightSession>,
    mut events: EventWriter<FlightEvent>,
) {
    let timestep = session.config().physics.timestep;
    let report = session.tick(&controls.0, timestep);
    events.send_batch(report.events);
}

pub fn update_readout(session: Res<FlightSession>, mut readout: ResMut<FlightReadout>) {
    *readout = FlightReadout::from_session(&session);
}
