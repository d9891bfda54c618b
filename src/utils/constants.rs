pub const GRAVITY: f64 = 9.81; // m/s^2
pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225; // kg/m^3

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 120.0; // s
pub const DEFAULT_MAX_SUBSTEPS: u32 = 8;

// Below this airspeed angle of attack is undefined and aerodynamics are switched off
pub const MIN_AIRSPEED_THRESHOLD: f64 = 1.0; // m/s

// Reference speed for control authority scaling (60 kt)
pub const CONTROL_REFERENCE_SPEED: f64 = 30.87; // m/s

// Euler pitch is kept away from the +/-90 deg singularity
pub const MAX_PITCH_ANGLE: f64 = 89.0; // deg

// Horizontal travel is limited to this fraction of the terrain half extent
pub const TRAVEL_LIMIT_FRACTION: f64 = 0.99;

pub const MAX_INTEGRITY: f64 = 100.0;

// Longest step a single tick will integrate
pub const MAX_TICK_DT: f64 = 0.25; // s

// Runway spawns sit this far past the threshold along the centreline
pub const RUNWAY_SPAWN_OFFSET: f64 = 20.0; // m
