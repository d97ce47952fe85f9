//! Rendering boundary
//!
//! The simulation never touches pixels. Each frame it hands its live entities
//! to a `DrawTarget`; what the target does with them is up to the caller.

pub mod snapshot;

pub use snapshot::{FrameSnapshot, Sprite, SpriteKind};

use crate::sim::{Asteroid, Bullet, Ship};

/// A sink that receives every live entity once per frame
pub trait DrawTarget {
    fn draw_ship(&mut self, ship: &Ship);
    fn draw_asteroid(&mut self, asteroid: &Asteroid);
    fn draw_bullet(&mut self, bullet: &Bullet);
}
