//! Geometry primitives shared by placement, collision, and ray casting
//!
//! Pure functions only. Everything here operates on `glam::Vec2` and the
//! static `Wall` type; no per-frame state.

use glam::Vec2;

use super::wall::Wall;

/// Whether segment AB crosses segment CD.
///
/// Uses the standard cross-product parametrization. Parallel or collinear
/// segments (zero denominator) are reported as *intersecting* on purpose:
/// this predicate is only used to validate candidate wall placement, where
/// rejecting a parallel candidate is the safe answer. It is not a robust
/// general-purpose intersection test.
pub fn segments_intersect(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    let t_top = (d.x - c.x) * (a.y - c.y) - (d.y - c.y) * (a.x - c.x);
    let u_top = (c.y - a.y) * (a.x - b.x) - (c.x - a.x) * (a.y - b.y);
    let bottom = (d.y - c.y) * (b.x - a.x) - (d.x - c.x) * (b.y - a.y);

    if bottom != 0.0 {
        let t = t_top / bottom;
        let u = u_top / bottom;
        return (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u);
    }

    true
}

/// Result of a circle-vs-wall contact check
#[derive(Debug, Clone, Copy)]
pub struct CircleContact {
    /// Whether the disc overlaps the wall segment
    pub hit: bool,
    /// Closest point on the segment to the circle center (if hit)
    pub point: Vec2,
}

impl CircleContact {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
        }
    }
}

/// Check whether a disc at `center` with radius `radius` touches `wall`.
///
/// Projects the center onto the wall segment, clamps the projection parameter
/// to [0, 1], and compares squared distance against radius².
pub fn circle_wall_collision(center: Vec2, radius: f32, wall: &Wall) -> CircleContact {
    let ab = wall.end - wall.start;
    let t = (center - wall.start).dot(ab) / ab.length_squared();
    let closest = wall.start + ab * t.clamp(0.0, 1.0);

    if center.distance_squared(closest) <= radius * radius {
        CircleContact {
            hit: true,
            point: closest,
        }
    } else {
        CircleContact::miss()
    }
}

/// Unit normal of a wall (its direction rotated 90°).
///
/// The wall must have distinct endpoints; `Wall::new` guarantees this, so the
/// normalization here never divides by zero.
#[inline]
pub fn wall_normal(wall: &Wall) -> Vec2 {
    let d = wall.end - wall.start;
    Vec2::new(-d.y, d.x) / d.length()
}

/// Reflect a velocity off a surface normal: v' = v - 2(v·n)n
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Reflect a velocity off a wall, modeling an elastic bounce
#[inline]
pub fn reflect_velocity(velocity: Vec2, wall: &Wall) -> Vec2 {
    reflect(velocity, wall_normal(wall))
}
