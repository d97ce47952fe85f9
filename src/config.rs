//! Simulation tuning
//!
//! A single immutable value handed to `Wave::new`. Every speed, radius and
//! rate the simulation uses is read from here rather than from globals.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{AsteroidSize, Playfield};

/// Radius and speed shared by every asteroid of one size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsteroidClass {
    /// Collision radius (half the sprite diameter)
    pub radius: f32,
    /// Speed in pixels per frame
    pub speed: f32,
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Playfield ===
    pub width: f32,
    pub height: f32,
    /// Margin beyond each edge used for wrap and bullet expiry
    pub dead_zone: f32,

    // === Ship ===
    pub ship_radius: f32,
    /// Velocity added along the facing per thrust frame
    pub ship_impulse: f32,
    /// Hard cap on ship speed
    pub ship_max_speed: f32,
    /// Degrees turned per frame
    pub ship_turn_rate: f32,
    pub starting_lives: u32,

    // === Bullets ===
    pub bullet_radius: f32,
    pub bullet_speed: f32,
    /// Frames that must pass between shots
    pub bullet_rate: u32,

    // === Asteroids ===
    pub small: AsteroidClass,
    pub medium: AsteroidClass,
    pub large: AsteroidClass,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            dead_zone: DEAD_ZONE,

            ship_radius: SHIP_RADIUS,
            ship_impulse: SHIP_IMPULSE,
            ship_max_speed: SHIP_MAX_SPEED,
            ship_turn_rate: SHIP_TURN_RATE,
            starting_lives: SHIP_LIVES,

            bullet_radius: BULLET_RADIUS,
            bullet_speed: BULLET_SPEED,
            bullet_rate: BULLET_RATE,

            small: AsteroidClass {
                radius: SMALL_RADIUS,
                speed: SMALL_SPEED,
            },
            medium: AsteroidClass {
                radius: MEDIUM_RADIUS,
                speed: MEDIUM_SPEED,
            },
            large: AsteroidClass {
                radius: LARGE_RADIUS,
                speed: LARGE_SPEED,
            },
        }
    }
}

impl SimConfig {
    /// Decode a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::info!("Loaded simulation config ({}x{})", config.width, config.height);
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("ship_radius", self.ship_radius),
            ("ship_impulse", self.ship_impulse),
            ("ship_max_speed", self.ship_max_speed),
            ("bullet_radius", self.bullet_radius),
            ("bullet_speed", self.bullet_speed),
            ("small.radius", self.small.radius),
            ("medium.radius", self.medium.radius),
            ("large.radius", self.large.radius),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        // Zero is allowed here: a stationary class or no margin
        let non_negative = [
            ("dead_zone", self.dead_zone),
            ("ship_turn_rate", self.ship_turn_rate),
            ("small.speed", self.small.speed),
            ("medium.speed", self.medium.speed),
            ("large.speed", self.large.speed),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.starting_lives == 0 {
            return Err(ConfigError::ZeroCount {
                name: "starting_lives",
            });
        }
        Ok(())
    }

    /// Radius and speed for an asteroid size
    pub fn asteroid_class(&self, size: AsteroidSize) -> AsteroidClass {
        match size {
            AsteroidSize::Small => self.small,
            AsteroidSize::Medium => self.medium,
            AsteroidSize::Large => self.large,
        }
    }

    /// The wrap/expiry area described by this config
    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.width, self.height, self.dead_zone)
    }
}
