use thiserror::Error;

/// Errors raised while loading or validating a [`GestureConfig`](crate::config::GestureConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid scale range: min {min} must be positive and not exceed max {max}")]
    InvalidScaleRange { min: f32, max: f32 },

    #[error("Tap displacement threshold must be finite and non-negative, got {0}")]
    InvalidTapThreshold(f32),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading a [`RegionMap`](crate::region::RegionMap)
#[derive(Debug, Error)]
pub enum RegionMapError {
    #[error("Failed to parse region map: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Region has an empty id")]
    EmptyId,

    #[error("Duplicate region id: {0}")]
    DuplicateId(String),

    #[error("Region {id} outline needs at least 3 points, got {points}")]
    DegenerateOutline { id: String, points: usize },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type RegionMapResult<T> = Result<T, RegionMapError>;
