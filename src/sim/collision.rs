//! Collision detection and asteroid fragmentation geometry
//!
//! Everything collides as a circle. Fragmentation spreads three pieces evenly
//! around the direction of the bullet that caused it.

use glam::Vec2;

use super::state::Body;

/// Angle between successive fragment headings (120 degrees)
pub const FRAGMENT_SPREAD: f32 = std::f32::consts::TAU / 3.0;

/// Strict circle overlap: touching circles do not collide
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Circle overlap between two bodies
#[inline]
pub fn bodies_overlap(a: &impl Body, b: &impl Body) -> bool {
    circles_overlap(a.position(), a.radius(), b.position(), b.radius())
}

/// The three fragment headings for a bullet travelling with `bullet_vel`.
///
/// The first follows the bullet; the others are rotated 120 and 240 degrees
/// from it. A zero velocity falls back to +x.
pub fn fragment_directions(bullet_vel: Vec2) -> [Vec2; 3] {
    let v1 = bullet_vel.try_normalize().unwrap_or(Vec2::X);
    let step = Vec2::from_angle(FRAGMENT_SPREAD);
    let v2 = step.rotate(v1);
    let v3 = step.rotate(v2);
    [v1, v2, v3]
}

/// A fragment to spawn: offset from the destroyed center by its own radius
/// along `direction`, moving along `direction` at its size's speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentPlacement {
    pub center: Vec2,
    pub direction: Vec2,
}

/// Place three fragments of `fragment_radius` around `center`
pub fn place_fragments(center: Vec2, bullet_vel: Vec2, fragment_radius: f32) -> [FragmentPlacement; 3] {
    fragment_directions(bullet_vel).map(|direction| FragmentPlacement {
        center: center + direction * fragment_radius,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_touching_is_not_a_collision() {
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(15.0, 0.0), 10.0));
        assert!(circles_overlap(Vec2::ZERO, 5.0, Vec2::new(14.99, 0.0), 10.0));
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(15.01, 0.0), 10.0));
    }

    #[test]
    fn test_fragment_directions_follow_bullet() {
        let [v1, v2, v3] = fragment_directions(Vec2::new(0.0, 10.0));
        assert!(v1.abs_diff_eq(Vec2::Y, 1e-6));
        // 120 and 240 degrees counter-clockwise from +y
        let c = FRAGMENT_SPREAD.cos();
        let s = FRAGMENT_SPREAD.sin();
        assert!(v2.abs_diff_eq(Vec2::new(-s, c), 1e-5));
        assert!(v3.abs_diff_eq(Vec2::new(s, c), 1e-5));
    }

    #[test]
    fn test_fragment_directions_zero_velocity() {
        let [v1, _, _] = fragment_directions(Vec2::ZERO);
        assert_eq!(v1, Vec2::X);
    }

    #[test]
    fn test_place_fragments_offsets_by_radius() {
        let center = Vec2::new(100.0, 100.0);
        for placement in place_fragments(center, Vec2::new(3.0, 4.0), 33.0) {
            assert!(((placement.center - center).length() - 33.0).abs() < 1e-4);
            assert!((placement.direction.length() - 1.0).abs() < 1e-5);
        }
    }

    proptest! {
        #[test]
        fn prop_collision_iff_strictly_closer(
            d in 0.0f32..200.0,
            r1 in 0.5f32..80.0,
            r2 in 0.5f32..80.0,
        ) {
            let hit = circles_overlap(Vec2::ZERO, r1, Vec2::new(d, 0.0), r2);
            prop_assert_eq!(hit, d < r1 + r2);
        }

        #[test]
        fn prop_fragments_spread_120_degrees(x in -50.0f32..50.0, y in -50.0f32..50.0) {
            prop_assume!(Vec2::new(x, y).length() > 1e-3);
            let dirs = fragment_directions(Vec2::new(x, y));
            let expected = FRAGMENT_SPREAD.cos();
            for (i, j) in [(0, 1), (1, 2), (0, 2)] {
                prop_assert!((dirs[i].dot(dirs[j]) - expected).abs() < 1e-4);
            }
        }
    }
}
