//! Headless frame recorder
//!
//! Collects one `Sprite` per drawn entity. Useful for tests, replays, and
//! for shipping a frame to a renderer that lives elsewhere.

use serde::{Deserialize, Serialize};

use super::DrawTarget;
use crate::sim::{Asteroid, AsteroidSize, Body, Bullet, Ship};

/// Colors for game elements
pub mod colors {
    pub const SHIP: [f32; 4] = [0.2, 0.8, 0.4, 1.0];
    pub const BULLET: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const ASTEROID_SMALL: [f32; 4] = [0.7, 0.7, 0.8, 1.0];
    pub const ASTEROID_MEDIUM: [f32; 4] = [0.6, 0.5, 0.45, 1.0];
    pub const ASTEROID_LARGE: [f32; 4] = [0.5, 0.4, 0.35, 1.0];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Ship,
    Asteroid(AsteroidSize),
    Bullet,
}

/// One entity as it should appear on screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Heading in degrees (ships only, 0 otherwise)
    pub angle: f32,
    pub color: [f32; 4],
}

/// Every sprite drawn in one frame, in draw order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub sprites: Vec<Sprite>,
}

impl FrameSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.sprites.clear();
    }

    pub fn count(&self, kind: SpriteKind) -> usize {
        self.sprites.iter().filter(|s| s.kind == kind).count()
    }

    fn push(&mut self, kind: SpriteKind, body: &impl Body, angle: f32, color: [f32; 4]) {
        let pos = body.position();
        self.sprites.push(Sprite {
            kind,
            x: pos.x,
            y: pos.y,
            radius: body.radius(),
            angle,
            color,
        });
    }
}

impl DrawTarget for FrameSnapshot {
    fn draw_ship(&mut self, ship: &Ship) {
        self.push(SpriteKind::Ship, ship, ship.angle(), colors::SHIP);
    }

    fn draw_asteroid(&mut self, asteroid: &Asteroid) {
        let color = match asteroid.size() {
            AsteroidSize::Small => colors::ASTEROID_SMALL,
            AsteroidSize::Medium => colors::ASTEROID_MEDIUM,
            AsteroidSize::Large => colors::ASTEROID_LARGE,
        };
        self.push(SpriteKind::Asteroid(asteroid.size()), asteroid, 0.0, color);
    }

    fn draw_bullet(&mut self, bullet: &Bullet) {
        self.push(SpriteKind::Bullet, bullet, 0.0, colors::BULLET);
    }
}
