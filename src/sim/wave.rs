//! Wave state
//!
//! One level instance: the ship, asteroids, bullets, lives and fire cooldown.
//! The wave only reports facts; the caller decides when to take a life and
//! when to respawn (see `session`).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::playfield::Playfield;
use super::state::{Asteroid, Body, Bullet, Ship};
use crate::config::SimConfig;
use crate::level::LevelData;
use crate::renderer::DrawTarget;

/// What a caller can read off a wave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveStatus {
    /// Ship alive and asteroids remain
    Active,
    /// Ship gone, lives remain
    ShipDestroyed,
    /// Every asteroid destroyed with the ship alive
    Won,
    /// Ship gone and no lives left
    Lost,
}

/// Complete wave state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wave {
    pub(super) config: SimConfig,
    pub(super) playfield: Playfield,
    /// Kept so a fresh ship can be placed without reloading anything
    pub(super) level: LevelData,
    pub(super) ship: Option<Ship>,
    pub(super) asteroids: Vec<Asteroid>,
    pub(super) bullets: Vec<Bullet>,
    pub(super) lives: u32,
    /// Frames since the last shot
    pub(super) fire_cooldown: u32,
    /// Simulation tick counter
    pub(super) time_ticks: u64,
    /// Accumulated `dt` handed to `update`
    pub(super) elapsed: f32,
}

impl Wave {
    /// Build a wave from a decoded level.
    ///
    /// Panics if the level or config fail validation; both are expected to
    /// have been checked where they were decoded.
    pub fn new(level: LevelData, config: SimConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid simulation config: {err}");
        }
        if let Err(err) = level.validate() {
            panic!("invalid level: {err}");
        }

        let asteroids: Vec<Asteroid> = level
            .asteroids
            .iter()
            .map(|spec| {
                Asteroid::new(
                    spec.position,
                    spec.direction,
                    spec.size,
                    config.asteroid_class(spec.size),
                )
            })
            .collect();

        log::info!(
            "Wave created: {} asteroids, {} lives",
            asteroids.len(),
            config.starting_lives
        );

        let ship = Some(Self::ship_from_level(&level, &config));
        Self {
            playfield: config.playfield(),
            lives: config.starting_lives,
            config,
            level,
            ship,
            asteroids,
            bullets: Vec::new(),
            fire_cooldown: 0,
            time_ticks: 0,
            elapsed: 0.0,
        }
    }

    fn ship_from_level(level: &LevelData, config: &SimConfig) -> Ship {
        Ship::new(level.ship.position, level.ship.angle, config.ship_radius)
    }

    /// Place a fresh ship at the level's start position and heading.
    ///
    /// Asteroids and bullets are left as they are. Panics once lives are
    /// exhausted: a lost wave cannot continue.
    pub fn respawn(&mut self) {
        assert!(self.lives > 0, "respawn requested with no lives remaining");
        self.ship = Some(Self::ship_from_level(&self.level, &self.config));
        log::info!("Ship respawned ({} lives left)", self.lives);
    }

    /// Take one life. Panics if none remain.
    pub fn lose_life(&mut self) -> u32 {
        assert!(self.lives > 0, "lose_life called with no lives remaining");
        self.lives -= 1;
        log::info!("Life lost, {} remaining", self.lives);
        self.lives
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn has_ship(&self) -> bool {
        self.ship.is_some()
    }

    pub fn ship(&self) -> Option<&Ship> {
        self.ship.as_ref()
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn fire_cooldown(&self) -> u32 {
        self.fire_cooldown
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn level(&self) -> &LevelData {
        &self.level
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    /// Won iff no asteroids remain and the ship is alive
    pub fn is_won(&self) -> bool {
        self.asteroids.is_empty() && self.ship.is_some()
    }

    /// Lost iff the ship is gone and no lives remain
    pub fn is_lost(&self) -> bool {
        self.ship.is_none() && self.lives == 0
    }

    pub fn status(&self) -> WaveStatus {
        match (self.ship.is_some(), self.lives) {
            (true, _) if self.asteroids.is_empty() => WaveStatus::Won,
            (true, _) => WaveStatus::Active,
            (false, 0) => WaveStatus::Lost,
            (false, _) => WaveStatus::ShipDestroyed,
        }
    }

    /// Hand every live entity to a render sink: ship, asteroids, then bullets
    pub fn draw(&self, target: &mut impl DrawTarget) {
        if let Some(ship) = &self.ship {
            target.draw_ship(ship);
        }
        for asteroid in &self.asteroids {
            target.draw_asteroid(asteroid);
        }
        for bullet in &self.bullets {
            target.draw_bullet(bullet);
        }
    }

    /// Nearest asteroid to a point, if any
    pub fn nearest_asteroid(&self, point: Vec2) -> Option<&Asteroid> {
        self.asteroids.iter().min_by(|a, b| {
            a.position()
                .distance_squared(point)
                .partial_cmp(&b.position().distance_squared(point))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}
