//! Level descriptions
//!
//! A level is the already-decoded record a wave is built from: where the ship
//! starts and which asteroids exist. Reading level files is the caller's job;
//! this module decodes JSON text and can generate levels procedurally.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::error::LevelError;
use crate::sim::AsteroidSize;

/// Cap on generated asteroids per wave
pub const MAX_GENERATED_ASTEROIDS: u32 = 8;
/// Extra clearance between the ship and a freshly generated asteroid
pub const SPAWN_CLEARANCE: f32 = 80.0;

/// Ship start position and heading (degrees)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipStart {
    pub position: Vec2,
    pub angle: f32,
}

/// One asteroid as described by the level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidSpec {
    pub position: Vec2,
    /// Travel direction; need not be unit length, may be zero
    pub direction: Vec2,
    pub size: AsteroidSize,
}

/// A complete level description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    pub ship: ShipStart,
    pub asteroids: Vec<AsteroidSpec>,
}

impl LevelData {
    /// Decode and validate a level from JSON text
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: LevelData = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    /// Every coordinate must be finite
    pub fn validate(&self) -> Result<(), LevelError> {
        if !self.ship.position.is_finite() {
            return Err(LevelError::NonFiniteShip { field: "position" });
        }
        if !self.ship.angle.is_finite() {
            return Err(LevelError::NonFiniteShip { field: "angle" });
        }
        for (index, spec) in self.asteroids.iter().enumerate() {
            if !spec.position.is_finite() {
                return Err(LevelError::NonFiniteAsteroid {
                    index,
                    field: "position",
                });
            }
            if !spec.direction.is_finite() {
                return Err(LevelError::NonFiniteAsteroid {
                    index,
                    field: "direction",
                });
            }
        }
        Ok(())
    }
}

/// Generate a level deterministically from a seed and wave number.
///
/// The ship starts centered and facing up. Large asteroids are scattered on a
/// ring around it, far enough away not to hit it on the first frame.
pub fn generate_level(seed: u64, wave_index: u32, config: &SimConfig) -> LevelData {
    use std::f32::consts::TAU;

    // Same seed and wave always give the same layout
    let wave_seed = (wave_index as u64)
        .wrapping_mul(2654435761)
        .wrapping_add(seed);
    let mut rng = Pcg32::seed_from_u64(wave_seed);

    let center = Vec2::new(config.width / 2.0, config.height / 2.0);
    let max_dist = config.width.min(config.height) / 2.0;
    let min_dist = (config.ship_radius + config.large.radius + SPAWN_CLEARANCE).min(max_dist);

    let count = (2 + wave_index).min(MAX_GENERATED_ASTEROIDS);
    let asteroids = (0..count)
        .map(|_| {
            let theta = rng.random_range(0.0..TAU);
            let dist = rng.random_range(min_dist..=max_dist);
            let heading = rng.random_range(0.0..TAU);
            AsteroidSpec {
                position: center + Vec2::from_angle(theta) * dist,
                direction: Vec2::from_angle(heading),
                size: AsteroidSize::Large,
            }
        })
        .collect();

    log::info!("Generated wave {} with {} asteroids (seed {})", wave_index, count, seed);

    LevelData {
        ship: ShipStart {
            position: center,
            angle: 90.0,
        },
        asteroids,
    }
}
