//! Errors raised while decoding data handed to the simulation core
//!
//! The simulation itself has no failure paths; only the boundary that turns
//! external data into a `SimConfig` or `LevelData` can fail.

use thiserror::Error;

/// Invalid simulation tuning
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config value `{name}` must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("config value `{name}` must be at least 1")]
    ZeroCount { name: &'static str },
}

/// Invalid level description
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to parse level JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("ship start {field} is not finite")]
    NonFiniteShip { field: &'static str },

    #[error("asteroid {index} has a non-finite {field}")]
    NonFiniteAsteroid { index: usize, field: &'static str },
}
