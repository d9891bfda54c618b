use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{build_height_field, SimulationConfig, TerrainHeightField, WaypointTable};
use crate::components::{
    AirData, AircraftState, Attitude, ControlSurfaces, DamageState, FlightMode, FlightStatus,
    SpatialComponent, Waypoint,
};
use crate::systems::{
    query_ground, ContactOutcome, DamageModel, FlightDynamicsModel, FlightEvent,
    FlightStateMachine, GroundContactResolver, Guidance, NavigationComputer,
};
use crate::utils::{ConfigError, MAX_TICK_DT, RUNWAY_SPAWN_OFFSET};

/// Airborne start in trimmed flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirborneSpawn {
    pub position: Vector3<f64>,
    /// Heading (rad, clockwise from north).
    pub heading: f64,
    /// True airspeed along the flight path (m/s).
    pub airspeed: f64,
    /// Flight path angle (rad, positive climbing).
    pub flight_path_angle: f64,
}

/// Where a flight starts after a reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpawnPoint {
    /// Parked on the centreline of the runway at `index` in the table,
    /// facing down the runway.
    Runway { index: usize },
    Airborne(AirborneSpawn),
}

impl Default for SpawnPoint {
    fn default() -> Self {
        SpawnPoint::Runway { index: 0 }
    }
}

/// Read-only view of the session after a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub mode: FlightMode,
    pub stall_warning: bool,
    pub overspeed_warning: bool,
    pub integrity: f64,
    pub lift_to_weight: f64,
    /// Height above max(terrain, sea level) (m).
    pub agl: f64,
    pub air_data: AirData,
    pub guidance: Guidance,
    /// Code of the prohibited zone the aircraft is in.
    pub zone: Option<String>,
    pub events: Vec<FlightEvent>,
}

/// A single flight: the mutable aircraft, damage and mode plus shared
/// handles to the read-only world.
///
/// All mutation goes through [`FlightSession::tick`] and
/// [`FlightSession::reset`]; once destroyed only a reset changes anything.
#[derive(Resource, Debug, Clone)]
pub struct FlightSession {
    config: SimulationConfig,
    terrain: Arc<TerrainHeightField>,
    waypoints: Arc<WaypointTable>,

    dynamics: FlightDynamicsModel,
    contact: GroundContactResolver,
    damage_model: DamageModel,
    state_machine: FlightStateMachine,
    navigation: NavigationComputer,

    aircraft: AircraftState,
    damage: DamageState,
    status: FlightStatus,
    selected_waypoint: usize,
    spawn: SpawnPoint,
    accumulator: f64,
    elapsed: f64,
    last_air_data: AirData,
    last_lift_to_weight: f64,
}

impl FlightSession {
    /// Start a session parked on the first runway.
    pub fn new(
        config: SimulationConfig,
        terrain: Arc<TerrainHeightField>,
        waypoints: Arc<WaypointTable>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if waypoints.is_empty() {
            return Err(ConfigError::invalid("runways", "at least one runway is required"));
        }

        let dynamics = FlightDynamicsModel::new(
            config.aircraft.clone(),
            config.physics.clone(),
            config.ground.ground_control_factor,
        );
        let contact = GroundContactResolver::new(config.ground.clone(), config.physics.gravity);
        let damage_model = DamageModel::new(config.damage.clone(), &config.ground);
        let navigation = NavigationComputer::new(config.navigation.clone());

        let mut session = Self {
            config,
            terrain,
            waypoints,
            dynamics,
            contact,
            damage_model,
            state_machine: FlightStateMachine,
            navigation,
            aircraft: AircraftState::default(),
            damage: DamageState::default(),
            status: FlightStatus::new(FlightMode::Grounded),
            selected_waypoint: 0,
            spawn: SpawnPoint::default(),
            accumulator: 0.0,
            elapsed: 0.0,
            last_air_data: AirData::default(),
            last_lift_to_weight: 0.0,
        };
        session.reset(SpawnPoint::default());
        info!(
            "Flight session ready: {} runways, terrain half extent {:.0} m",
            session.waypoints.len(),
            session.terrain.half_extent()
        );
        Ok(session)
    }

    /// Build terrain and world data from `config` and start a session.
    ///
    /// Without a world data file a single runway is laid at the origin,
    /// pointing north at the local ground height.
    pub fn from_config(config: SimulationConfig) -> Result<Self, ConfigError> {
        let terrain = build_height_field(&config.terrain)?;
        let waypoints = match &config.world_data {
            Some(path) => WaypointTable::load(path)?,
            None => {
                let home = Waypoint::new(
                    "HOM",
                    "Home Field",
                    Vector3::new(0.0, terrain.ground_height(0.0, 0.0), 0.0),
                    0.0,
                    30.0,
                    1200.0,
                )?;
                WaypointTable::new(vec![home], Vec::new())?
            }
        };
        Self::new(config, Arc::new(terrain), Arc::new(waypoints))
    }

    /// Advance the flight by one step of `dt` seconds.
    ///
    /// Destroyed sessions and non-finite or non-positive `dt` are no-ops
    /// that still return a report. `dt` is capped at [`MAX_TICK_DT`].
    pub fn tick(&mut self, controls: &ControlSurfaces, dt: f64) -> TickReport {
        if self.status.is_destroyed() {
            return self.report(Vec::new());
        }
        if !(dt.is_finite() && dt > 0.0) {
            debug!("Ignoring tick with dt {dt}");
            return self.report(Vec::new());
        }
        if !controls.is_within_limits() {
            debug!("Clamping out of range controls {controls:?}");
        }
        let dt = dt.min(MAX_TICK_DT);

        let grounded = self.status.mode == FlightMode::Grounded;
        let dynamics = self.dynamics.step(
            &mut self.aircraft,
            controls,
            &self.terrain,
            &self.damage,
            grounded,
            dt,
        );

        let position = self.aircraft.spatial.position;
        let ground = query_ground(
            &self.terrain,
            &self.waypoints,
            position.x,
            position.z,
            self.config.navigation.proximity_radius,
        );
        let contact = self.contact.resolve(
            &mut self.aircraft,
            self.status.mode,
            &ground,
            dynamics.lift_to_weight,
            dt,
        );

        if let ContactOutcome::Touchdown(touchdown) = &contact {
            info!(
                "Touchdown on {:?}: {:?}, severity {:.2}, sink {:.1} m/s",
                touchdown.surface, touchdown.quality, touchdown.severity, touchdown.sink_rate
            );
            self.damage_model.apply_impact(&mut self.damage, touchdown.severity);
        }

        let overspeed = dynamics.overspeed_severity > 0.0;
        if overspeed && !self.status.overspeed_warning {
            warn!(
                "Overspeed: {:.1} m/s exceeds {:.1} m/s",
                dynamics.air_data.true_airspeed,
                self.config.aircraft.never_exceed_speed
            );
        }
        self.damage_model
            .apply_overspeed(&mut self.damage, dynamics.overspeed_severity, dt);

        let events = self.state_machine.update(
            &mut self.status,
            &contact,
            &self.damage,
            dynamics.stalled,
            overspeed,
        );
        for event in &events {
            match event {
                FlightEvent::Liftoff => info!(
                    "Liftoff at {:.1} m/s, lift/weight {:.3}",
                    dynamics.air_data.true_airspeed, dynamics.lift_to_weight
                ),
                FlightEvent::Destroyed { cause } => warn!("Aircraft destroyed: {cause:?}"),
                FlightEvent::Touchdown { .. } => {}
            }
        }

        if self.status.is_destroyed() {
            self.aircraft.spatial.velocity = Vector3::zeros();
            self.aircraft.spatial.angular_rates = Default::default();
        }

        self.elapsed += dt;
        self.last_air_data = dynamics.air_data;
        self.last_lift_to_weight = dynamics.lift_to_weight;
        self.report(events)
    }

    /// Feed a variable frame time through the fixed-step accumulator.
    /// Returns one report per tick run.
    pub fn advance(&mut self, controls: &ControlSurfaces, frame_dt: f64) -> Vec<TickReport> {
        let mut reports = Vec::new();
        if self.status.is_destroyed() || !(frame_dt.is_finite() && frame_dt > 0.0) {
            return reports;
        }

        let timestep = self.config.physics.timestep;
        let max_substeps = self.config.physics.max_substeps;
        self.accumulator += frame_dt;

        let mut steps = 0;
        while self.accumulator >= timestep && steps < max_substeps {
            reports.push(self.tick(controls, timestep));
            self.accumulator -= timestep;
            steps += 1;
            if self.status.is_destroyed() {
                self.accumulator = 0.0;
                break;
            }
        }
        if self.accumulator >= timestep {
            debug!(
                "Dropping {:.3} s of simulation time after {} substeps",
                self.accumulator - self.accumulator % timestep,
                steps
            );
            self.accumulator %= timestep;
        }
        reports
    }

    /// Discard the current flight and start again at `spawn`.
    pub fn reset(&mut self, spawn: SpawnPoint) {
        let spawn = match spawn {
            SpawnPoint::Runway { index } if index >= self.waypoints.len() => {
                warn!("No runway at index {index}, spawning at the first runway");
                SpawnPoint::Runway { index: 0 }
            }
            other => other,
        };

        let (aircraft, mode) = match spawn {
            SpawnPoint::Runway { index } => (self.runway_spawn(index), FlightMode::Grounded),
            SpawnPoint::Airborne(airborne) => (self.airborne_spawn(&airborne), FlightMode::Airborne),
        };

        self.aircraft = aircraft;
        self.damage.reset();
        self.status = FlightStatus::new(mode);
        self.spawn = spawn;
        self.accumulator = 0.0;
        self.elapsed = 0.0;
        self.last_air_data = AirData::default();
        self.last_lift_to_weight = 0.0;
        info!("Flight reset: {spawn:?}");
    }

    /// Reset to the spawn used by the last reset.
    pub fn restart(&mut self) {
        self.reset(self.spawn);
    }

    fn runway_spawn(&self, index: usize) -> AircraftState {
        let runway = self.waypoints.at(index);
        let heading = runway.headings[0];
        let offset = Vector3::new(heading.sin(), 0.0, heading.cos()) * RUNWAY_SPAWN_OFFSET;
        AircraftState::parked(runway.threshold + offset, heading)
    }

    fn airborne_spawn(&self, spawn: &AirborneSpawn) -> AircraftState {
        let gamma = spawn.flight_path_angle;
        let alpha = self.dynamics.trim_angle_of_attack(spawn.airspeed, gamma, 0.0);
        let (sin_h, cos_h) = spawn.heading.sin_cos();
        let velocity = Vector3::new(sin_h * gamma.cos(), gamma.sin(), cos_h * gamma.cos())
            * spawn.airspeed;
        AircraftState::new(SpatialComponent {
            position: spawn.position,
            velocity,
            attitude: Attitude::new(gamma + alpha, 0.0, spawn.heading),
            ..Default::default()
        })
    }

    /// Select the waypoint with `code`, returning its index.
    pub fn select_waypoint(&mut self, code: &str) -> Option<usize> {
        let index = self.waypoints.index_of(code)?;
        self.selected_waypoint = index;
        Some(index)
    }

    /// Step the selection to the next waypoint in the table.
    pub fn cycle_waypoint(&mut self) -> &Waypoint {
        self.selected_waypoint = self.waypoints.next_index(self.selected_waypoint);
        self.selected()
    }

    pub fn selected(&self) -> &Waypoint {
        self.waypoints.at(self.selected_waypoint)
    }

    pub fn guidance(&self) -> Guidance {
        self.navigation.compute_guidance(&self.aircraft, self.selected())
    }

    /// Report on the current state without advancing it.
    pub fn snapshot(&self) -> TickReport {
        self.report(Vec::new())
    }

    fn report(&self, events: Vec<FlightEvent>) -> TickReport {
        let position = &self.aircraft.spatial.position;
        TickReport {
            mode: self.status.mode,
            stall_warning: self.status.stall_warning,
            overspeed_warning: self.status.overspeed_warning,
            integrity: self.damage.integrity(),
            lift_to_weight: self.last_lift_to_weight,
            agl: self.terrain.agl(position),
            air_data: self.last_air_data,
            guidance: self.guidance(),
            zone: self
                .waypoints
                .zone_at(position.x, position.z)
                .map(|zone| zone.code.clone()),
            events,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn terrain(&self) -> &Arc<TerrainHeightField> {
        &self.terrain
    }

    pub fn waypoints(&self) -> &Arc<WaypointTable> {
        &self.waypoints
    }

    pub fn aircraft(&self) -> &AircraftState {
        &self.aircraft
    }

    pub fn damage(&self) -> &DamageState {
        &self.damage
    }

    pub fn status(&self) -> &FlightStatus {
        &self.status
    }

    pub fn mode(&self) -> FlightMode {
        self.status.mode
    }

    pub fn spawn(&self) -> SpawnPoint {
        self.spawn
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn agl(&self) -> f64 {
        self.terrain.agl(&self.aircraft.spatial.position)
    }
}
