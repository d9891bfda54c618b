use bevy::{log::LogPlugin, prelude::*};
use std::env;

use flightline::{
    components::{ControlSurfaces, FlightMode},
    plugins::{ControlInput, FlightPlugin, FlightReadout, FlightSet},
    resources::{FlightSession, SimulationConfig},
    systems::FlightEvent,
};

const DEFAULT_DURATION: f64 = 120.0; // s
const ROTATION_SPEED: f64 = 58.0; // m/s
const CRUISE_AGL: f64 = 450.0; // m

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    let duration = match args.next() {
        Some(seconds) => seconds.parse::<f64>()?,
        None => DEFAULT_DURATION,
    };

    let timestep = config.physics.timestep;
    let session = FlightSession::from_config(config)?;

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(FlightPlugin::new(session))
        .add_systems(
            FixedUpdate,
            (
                scripted_pilot.before(FlightSet::Simulate),
                log_flight_events.after(FlightSet::Readout),
            ),
        );
    app.finish();
    app.cleanup();

    info!("Flying scripted take-off and climb for {duration:.0} s");
    let steps = (duration / timestep).ceil() as usize;
    for step in 0..steps {
        app.world_mut().run_schedule(FixedUpdate);

        let readout = app.world().resource::<FlightReadout>();
        if step % (1.0 / timestep).round().max(1.0) as usize == 0 {
            debug!(
                "t={:.0}s {:?} IAS {:.0} kt ALT {:.0} ft VS {:.0} fpm HDG {:.0}",
                step as f64 * timestep,
                readout.mode,
                readout.airspeed_knots,
                readout.altitude_feet,
                readout.vertical_speed_fpm,
                readout.heading
            );
        }
        if readout.mode == FlightMode::Destroyed {
            break;
        }
    }

    let readout = app.world().resource::<FlightReadout>();
    info!(
        "Finished: {:?}, {:.0} ft AGL, {:.0} kt, integrity {:.0}, {:.1} km to {}",
        readout.mode,
        readout.agl_feet,
        readout.airspeed_knots,
        readout.integrity,
        readout.guidance.distance / 1000.0,
        readout.guidance.waypoint
    );
    Ok(())
}

/// Full power down the runway, rotate, then climb to cruise height.
fn scripted_pilot(readout: Res<FlightReadout>, mut controls: ResMut<ControlInput>) {
    let mut next = ControlSurfaces::with_throttle(1.0);
    match readout.mode {
        FlightMode::Grounded if readout.airspeed >= ROTATION_SPEED => {
            next.elevator = 0.3;
        }
        FlightMode::Grounded => {}
        FlightMode::Airborne if readout.agl < CRUISE_AGL => {
            // Hold roughly 8 degrees nose up
            next.elevator = ((8.0 - readout.pitch) * 0.05).clamp(-0.5, 0.5);
            next.aileron = (-readout.roll * 0.05).clamp(-0.5, 0.5);
        }
        FlightMode::Airborne => {
            next.throttle = 0.6;
            next.elevator = ((2.0 - readout.pitch) * 0.05).clamp(-0.5, 0.5);
            next.aileron = (-readout.roll * 0.05).clamp(-0.5, 0.5);
        }
        FlightMode::Destroyed => next = ControlSurfaces::default(),
    }
    controls.0 = next;
}

fn log_flight_events(mut events: EventReader<FlightEvent>) {
    for event in events.read() {
        info!("Flight event: {event:?}");
    }
}
