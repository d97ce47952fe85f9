//! Entity models: ship, asteroids and bullets
//!
//! Plain owned records. Rendering is handed off to a `DrawTarget`, and
//! collision tests live in `collision`; entities only know how to move.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::playfield::Playfield;
use crate::config::AsteroidClass;
use crate::{heading_vector, rotate_by_degrees};

/// Anything with a circular footprint that moves each frame
pub trait Body {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn radius(&self) -> f32;
}

/// Asteroid size categories, largest splits first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsteroidSize {
    Small,
    Medium,
    Large,
}

impl AsteroidSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            AsteroidSize::Small => "small",
            AsteroidSize::Medium => "medium",
            AsteroidSize::Large => "large",
        }
    }

    /// Size of the fragments produced when this asteroid is shot
    pub fn split(&self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pos: Vec2,
    vel: Vec2,
    /// Unit vector, always consistent with `angle`
    facing: Vec2,
    /// Heading in degrees; unbounded, wraps through trig
    angle: f32,
    radius: f32,
}

impl Ship {
    pub fn new(pos: Vec2, angle: f32, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            facing: heading_vector(angle),
            angle,
            radius,
        }
    }

    pub fn facing(&self) -> Vec2 {
        self.facing
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Rotate heading by `delta` degrees (positive = counter-clockwise)
    pub fn turn(&mut self, delta: f32) {
        self.angle += delta;
        // Renormalize so rounding drift doesn't build up over many turns
        self.facing = rotate_by_degrees(self.facing, delta).normalize();
    }

    /// Accelerate along the facing, hard-capping the resulting speed
    pub fn apply_impulse(&mut self, impulse: f32, max_speed: f32) {
        self.vel += self.facing * impulse;
        if self.vel.length() > max_speed {
            self.vel = self.vel.normalize_or_zero() * max_speed;
        }
    }

    /// Advance by velocity, then wrap
    pub fn advance(&mut self, field: &Playfield) {
        self.pos = field.wrap(self.pos + self.vel);
    }

    /// Where a bullet appears: the nose, not the center
    pub fn bullet_spawn_position(&self) -> Vec2 {
        self.pos + self.facing * self.radius
    }

    pub fn bullet_velocity(&self, bullet_speed: f32) -> Vec2 {
        self.facing * bullet_speed
    }
}

impl Body for Ship {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

/// An asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pos: Vec2,
    vel: Vec2,
    size: AsteroidSize,
    radius: f32,
}

impl Asteroid {
    /// `direction` is normalized before scaling; a zero direction gives a
    /// stationary asteroid.
    pub fn new(pos: Vec2, direction: Vec2, size: AsteroidSize, class: AsteroidClass) -> Self {
        Self {
            pos,
            vel: direction.normalize_or_zero() * class.speed,
            size,
            radius: class.radius,
        }
    }

    pub fn size(&self) -> AsteroidSize {
        self.size
    }

    /// Advance by velocity, then wrap
    pub fn advance(&mut self, field: &Playfield) {
        self.pos = field.wrap(self.pos + self.vel);
    }
}

impl Body for Asteroid {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

/// A bullet; its velocity is fixed at creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pos: Vec2,
    vel: Vec2,
    radius: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Advance by velocity. Bullets never wrap.
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

impl Body for Bullet {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    fn field() -> Playfield {
        Playfield::new(GAME_WIDTH, GAME_HEIGHT, DEAD_ZONE)
    }

    fn large() -> AsteroidClass {
        AsteroidClass {
            radius: LARGE_RADIUS,
            speed: LARGE_SPEED,
        }
    }

    #[test]
    fn test_ship_facing_follows_angle() {
        let mut ship = Ship::new(Vec2::ZERO, 0.0, SHIP_RADIUS);
        assert!(ship.facing().abs_diff_eq(Vec2::X, 1e-6));

        ship.turn(90.0);
        assert_eq!(ship.angle(), 90.0);
        assert!(ship.facing().abs_diff_eq(Vec2::Y, 1e-5));

        ship.turn(-180.0);
        assert!(ship.facing().abs_diff_eq(-Vec2::Y, 1e-5));
    }

    #[test]
    fn test_ship_impulse_caps_speed_exactly() {
        let mut ship = Ship::new(Vec2::ZERO, 30.0, SHIP_RADIUS);
        for _ in 0..100 {
            ship.apply_impulse(SHIP_IMPULSE, SHIP_MAX_SPEED);
        }
        assert!((ship.velocity().length() - SHIP_MAX_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_ship_advance_wraps() {
        let mut ship = Ship::new(Vec2::new(GAME_WIDTH + DEAD_ZONE - 1.0, 100.0), 0.0, SHIP_RADIUS);
        ship.apply_impulse(5.0, SHIP_MAX_SPEED);
        ship.advance(&field());
        assert!((ship.position().x - (GAME_WIDTH + DEAD_ZONE + 4.0 - field().wrap_span_x())).abs() < 1e-3);
        assert_eq!(ship.position().y, 100.0);
    }

    #[test]
    fn test_bullet_spawns_at_nose() {
        let ship = Ship::new(Vec2::new(100.0, 100.0), 90.0, SHIP_RADIUS);
        let spawn = ship.bullet_spawn_position();
        assert!(spawn.abs_diff_eq(Vec2::new(100.0, 100.0 + SHIP_RADIUS), 1e-4));
        assert!(ship.bullet_velocity(BULLET_SPEED).abs_diff_eq(Vec2::new(0.0, BULLET_SPEED), 1e-4));
    }

    #[test]
    fn test_asteroid_direction_is_normalized() {
        let asteroid = Asteroid::new(Vec2::ZERO, Vec2::new(3.0, 4.0), AsteroidSize::Large, large());
        assert!(asteroid.velocity().abs_diff_eq(Vec2::new(0.6, 0.8) * LARGE_SPEED, 1e-5));
        assert_eq!(asteroid.radius(), LARGE_RADIUS);
    }

    #[test]
    fn test_asteroid_zero_direction_is_stationary() {
        let mut asteroid = Asteroid::new(Vec2::new(5.0, 6.0), Vec2::ZERO, AsteroidSize::Large, large());
        assert_eq!(asteroid.velocity(), Vec2::ZERO);
        for _ in 0..10 {
            asteroid.advance(&field());
        }
        assert_eq!(asteroid.position(), Vec2::new(5.0, 6.0));
    }

    #[test]
    fn test_split_chain() {
        assert_eq!(AsteroidSize::Large.split(), Some(AsteroidSize::Medium));
        assert_eq!(AsteroidSize::Medium.split(), Some(AsteroidSize::Small));
        assert_eq!(AsteroidSize::Small.split(), None);
    }

    proptest! {
        #[test]
        fn prop_speed_never_exceeds_cap(
            turns in proptest::collection::vec(-180.0f32..180.0, 1..200),
        ) {
            let mut ship = Ship::new(Vec2::ZERO, 0.0, SHIP_RADIUS);
            for delta in turns {
                ship.turn(delta);
                ship.apply_impulse(SHIP_IMPULSE, SHIP_MAX_SPEED);
                prop_assert!(ship.velocity().length() <= SHIP_MAX_SPEED + 1e-4);
            }
        }

        #[test]
        fn prop_capped_impulse_lands_on_cap(angle in -360.0f32..360.0) {
            let mut ship = Ship::new(Vec2::ZERO, angle, SHIP_RADIUS);
            // One impulse larger than the cap must land exactly on it
            ship.apply_impulse(SHIP_MAX_SPEED * 3.0, SHIP_MAX_SPEED);
            prop_assert!((ship.velocity().length() - SHIP_MAX_SPEED).abs() < 1e-4);
        }

        #[test]
        fn prop_facing_stays_unit(turns in proptest::collection::vec(-45.0f32..45.0, 1..500)) {
            let mut ship = Ship::new(Vec2::ZERO, 0.0, SHIP_RADIUS);
            for delta in turns {
                ship.turn(delta);
            }
            prop_assert!((ship.facing().length() - 1.0).abs() < 1e-5);
            prop_assert!(ship.facing().abs_diff_eq(heading_vector(ship.angle()), 1e-3));
        }

        #[test]
        fn prop_stationary_move_is_identity(x in -64i32..864, y in -64i32..764) {
            let start = Vec2::new(x as f32, y as f32);
            let mut asteroid = Asteroid::new(start, Vec2::ZERO, AsteroidSize::Small, large());
            asteroid.advance(&field());
            asteroid.advance(&field());
            prop_assert_eq!(asteroid.position(), start);
        }
    }
}
