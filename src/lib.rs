//! Planetoids - wave simulation core for an asteroid-clearing arcade game
//!
//! Core modules:
//! - `sim`: Per-frame wave simulation (ship, asteroids, bullets, collisions)
//! - `renderer`: Render sink boundary and a headless frame recorder
//! - `session`: Drives a wave through life loss, respawn, win and loss
//! - `level`: Decoded level descriptions and procedural generation
//! - `config`: Immutable simulation tuning

pub mod config;
pub mod error;
pub mod level;
pub mod renderer;
pub mod session;
pub mod sim;

pub use config::{AsteroidClass, SimConfig};
pub use error::{ConfigError, LevelError};
pub use level::{AsteroidSpec, LevelData, ShipStart, generate_level};
pub use session::{Session, SessionPhase};

use glam::Vec2;

/// Default tuning constants
pub mod consts {
    /// Fixed simulation timestep (one arcade frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 700.0;
    /// Margin past the playfield edge before wrapping/expiry kicks in
    pub const DEAD_ZONE: f32 = 64.0;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 16.0;
    pub const SHIP_IMPULSE: f32 = 0.25;
    pub const SHIP_MAX_SPEED: f32 = 10.0;
    /// Degrees per frame
    pub const SHIP_TURN_RATE: f32 = 5.0;
    pub const SHIP_LIVES: u32 = 3;

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const BULLET_SPEED: f32 = 10.0;
    /// Frames between shots
    pub const BULLET_RATE: u32 = 5;

    /// Asteroid radii and speeds (pixels, pixels/frame)
    pub const SMALL_RADIUS: f32 = 20.0;
    pub const SMALL_SPEED: f32 = 4.0;
    pub const MEDIUM_RADIUS: f32 = 33.0;
    pub const MEDIUM_SPEED: f32 = 3.0;
    pub const LARGE_RADIUS: f32 = 50.0;
    pub const LARGE_SPEED: f32 = 2.0;
}

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg.to_radians()
}

/// Rotate a vector counter-clockwise by the given angle in degrees
#[inline]
pub fn rotate_by_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(deg_to_rad(degrees)).rotate(v)
}

/// Unit vector for a heading in degrees (0 = +x, counter-clockwise)
#[inline]
pub fn heading_vector(degrees: f32) -> Vec2 {
    Vec2::from_angle(deg_to_rad(degrees))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_by_degrees_quarter_turn() {
        let v = rotate_by_degrees(Vec2::X, 90.0);
        assert!(v.abs_diff_eq(Vec2::Y, 1e-6));
    }

    #[test]
    fn test_heading_vector_is_unit() {
        for deg in [0.0, 33.0, 180.0, -725.0] {
            assert!((heading_vector(deg).length() - 1.0).abs() < 1e-6);
        }
    }
}
