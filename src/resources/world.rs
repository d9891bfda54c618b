use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::components::{ProhibitedZone, Waypoint};
use crate::utils::ConfigError;

/// Runway record as stored in the world data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunwayRecord {
    pub code: String,
    pub name: String,
    /// Threshold position [x, y, z] (m).
    pub pos: [f64; 3],
    pub width: f64,
    pub length: f64,
    /// Runway heading (deg).
    pub heading: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub code: String,
    pub name: String,
    /// Centre [x, z] (m).
    pub pos: [f64; 2],
    /// Extent [x, z] (m).
    pub dims: [f64; 2],
}

/// Contents of the world data JSON file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldData {
    pub runways: Vec<RunwayRecord>,
    #[serde(default)]
    pub prohibited_zones: Vec<ZoneRecord>,
}

impl WorldData {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let data = Self::from_json(&json)?;
        info!(
            "Loaded {} runways and {} prohibited zones from {}",
            data.runways.len(),
            data.prohibited_zones.len(),
            path.as_ref().display()
        );
        Ok(data)
    }
}

/// Fixed, validated set of destinations. Read-only after startup.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointTable {
    waypoints: Vec<Waypoint>,
    zones: Vec<ProhibitedZone>,
}

impl TryFrom<WorldData> for WaypointTable {
    type Error = ConfigError;

    fn try_from(data: WorldData) -> Result<Self, Self::Error> {
        let waypoints = data
            .runways
            .iter()
            .map(|r| {
                Waypoint::from_degrees(
                    &r.code,
                    &r.name,
                    Vector3::new(r.pos[0], r.pos[1], r.pos[2]),
                    r.heading,
                    r.width,
                    r.length,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        let zones = data
            .prohibited_zones
            .into_iter()
            .map(|z| ProhibitedZone {
                code: z.code,
                name: z.name,
                center: z.pos,
                dimensions: z.dims,
            })
            .collect();
        Self::new(waypoints, zones)
    }
}

impl WaypointTable {
    pub fn new(waypoints: Vec<Waypoint>, zones: Vec<ProhibitedZone>) -> Result<Self, ConfigError> {
        if waypoints.is_empty() {
            return Err(ConfigError::invalid("runways", "at least one runway is required"));
        }
        let mut seen = HashSet::new();
        for waypoint in &waypoints {
            if !seen.insert(waypoint.code.as_str()) {
                return Err(ConfigError::DuplicateWaypoint(waypoint.code.clone()));
            }
        }
        Ok(Self { waypoints, zones })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        WorldData::load(path)?.try_into()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// Waypoint at `index`, wrapping around the end of the table.
    pub fn at(&self, index: usize) -> &Waypoint {
        &self.waypoints[index % self.waypoints.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }

    pub fn zones(&self) -> &[ProhibitedZone] {
        &self.zones
    }

    /// Index of the waypoint with `code`.
    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.waypoints.iter().position(|w| w.code == code)
    }

    pub fn find(&self, code: &str) -> Option<&Waypoint> {
        self.index_of(code).and_then(|i| self.get(i))
    }

    /// Cycle selection forward, wrapping at the end of the table.
    pub fn next_index(&self, current: usize) -> usize {
        (current + 1) % self.waypoints.len()
    }

    /// Cycle selection backward.
    pub fn previous_index(&self, current: usize) -> usize {
        let len = self.waypoints.len();
        (current % len + len - 1) % len
    }

    /// Runway whose paved surface contains (x, z), limited to runways whose
    /// threshold is within `radius`.
    pub fn runway_at(&self, x: f64, z: f64, radius: f64) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| {
            (w.threshold.x - x).hypot(w.threshold.z - z) <= radius && w.contains(x, z)
        })
    }

    pub fn zone_at(&self, x: f64, z: f64) -> Option<&ProhibitedZone> {
        self.zones.iter().find(|zone| zone.contains(x, z))
    }
}
