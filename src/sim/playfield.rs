//! Playfield geometry
//!
//! The visible area spans `[0, width] x [0, height]`. A dead zone extends it on
//! every side; wrapping entities teleport across it and bullets expire outside it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Visible play area plus its dead-zone margin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    pub dead_zone: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32, dead_zone: f32) -> Self {
        Self {
            width,
            height,
            dead_zone,
        }
    }

    /// Distance an entity is relocated by when it wraps horizontally
    #[inline]
    pub fn wrap_span_x(&self) -> f32 {
        self.width + 2.0 * self.dead_zone
    }

    /// Distance an entity is relocated by when it wraps vertically
    #[inline]
    pub fn wrap_span_y(&self) -> f32 {
        self.height + 2.0 * self.dead_zone
    }

    /// Toroidal wrap, each axis independently.
    ///
    /// A coordinate below `-dead_zone` or at/after `size + dead_zone` is moved
    /// by one full span to the opposite side. Assumes an entity never travels
    /// more than one span in a single frame.
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            wrap_axis(pos.x, self.width, self.dead_zone),
            wrap_axis(pos.y, self.height, self.dead_zone),
        )
    }

    /// Whether a point is still inside the dead-zone-extended bounds
    pub fn contains(&self, pos: Vec2) -> bool {
        let dz = self.dead_zone;
        !(pos.x < -dz || pos.x > self.width + dz || pos.y < -dz || pos.y > self.height + dz)
    }
}

#[inline]
fn wrap_axis(v: f32, size: f32, dead_zone: f32) -> f32 {
    let span = size + 2.0 * dead_zone;
    if v < -dead_zone {
        v + span
    } else if v >= size + dead_zone {
        v - span
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> Playfield {
        Playfield::new(800.0, 700.0, 64.0)
    }

    #[test]
    fn test_wrap_inside_is_identity() {
        let p = Vec2::new(-64.0, 763.0);
        assert_eq!(field().wrap(p), p);
    }

    #[test]
    fn test_wrap_right_edge() {
        let wrapped = field().wrap(Vec2::new(870.0, 10.0));
        assert_eq!(wrapped, Vec2::new(870.0 - 928.0, 10.0));
    }

    #[test]
    fn test_wrap_bottom_edge() {
        let wrapped = field().wrap(Vec2::new(10.0, -70.0));
        assert_eq!(wrapped, Vec2::new(10.0, -70.0 + 828.0));
    }

    #[test]
    fn test_contains_uses_dead_zone() {
        let f = field();
        assert!(f.contains(Vec2::new(-64.0, 0.0)));
        assert!(f.contains(Vec2::new(864.0, 764.0)));
        assert!(!f.contains(Vec2::new(-64.5, 0.0)));
        assert!(!f.contains(Vec2::new(0.0, 764.5)));
    }

    proptest! {
        #[test]
        fn prop_wrap_lands_in_bounds(x in -900i32..1700, y in -800i32..1500) {
            let f = field();
            let w = f.wrap(Vec2::new(x as f32, y as f32));
            prop_assert!(w.x >= -f.dead_zone && w.x < f.width + f.dead_zone);
            prop_assert!(w.y >= -f.dead_zone && w.y < f.height + f.dead_zone);
        }

        #[test]
        fn prop_wrap_moves_by_whole_span(x in -900i32..1700) {
            let f = field();
            let before = x as f32;
            let after = f.wrap(Vec2::new(before, 0.0)).x;
            let shift = (after - before).abs();
            prop_assert!(shift == 0.0 || shift == f.wrap_span_x());
        }
    }
}
