use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("Invalid waypoint code {0:?}: expected three uppercase letters")]
    InvalidWaypointCode(String),

    #[error("Duplicate waypoint code {0}")]
    DuplicateWaypoint(String),

    #[error("Terrain error: {0}")]
    Terrain(#[from] TerrainError),
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum TerrainError {
    #[error("Failed to read heightmap {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Heightmap metadata error: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("Grid must be at least 2x2 samples, got {cols}x{rows}")]
    GridTooSmall { cols: usize, rows: usize },

    #[error("Expected {expected} samples, got {actual}")]
    SampleCount { expected: usize, actual: usize },

    #[error("Sample {index} is not finite")]
    NonFiniteSample { index: usize },

    #[error("Invalid extent: {0}")]
    InvalidExtent(f64),

    #[error("Invalid height range: min {min}, max {max}")]
    InvalidHeightRange { min: f64, max: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error("Illegal flight mode transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: crate::components::FlightMode,
        to: crate::components::FlightMode,
    },
}
