//! Ray sensor: a rigid fan of rays with per-frame nearest-hit buffers
//!
//! Directions are precomputed once at construction (no trig per frame). Each
//! frame the sensor is re-anchored at its owner's position, its hit buffers
//! are reset, and `cast_against` is called once per wall; the nearest-hit
//! selection makes the wall order irrelevant to the final result.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use crate::consts::{RAY_LENGTH, T_ORIGIN_EPSILON};
use crate::lerp;
use super::wall::{Aabb, Wall};

/// A set of rigidly-attached rays cast from a shared origin
#[derive(Debug, Clone)]
pub struct RaySensor {
    ray_count: usize,
    origin: Vec2,
    spread: f32,
    ray_length: f32,
    /// Precomputed unit direction per ray, fixed for the sensor's lifetime
    dirs: Vec<Vec2>,
    /// Nearest recorded hit point per ray this frame
    hits: Vec<Option<Vec2>>,
    /// Parametric distance of the nearest hit per ray, +inf when none
    min_t: Vec<f32>,
}

impl RaySensor {
    /// Full-circle sensor with the default ray length.
    pub fn new(ray_count: usize, origin: Vec2) -> Self {
        Self::with_spread(ray_count, origin, TAU, RAY_LENGTH)
    }

    /// Sensor with an explicit spread (radians, centered on angle 0) and max
    /// cast distance.
    ///
    /// Ray directions are evenly distributed over the spread with a
    /// half-ray-width inset at each extreme, so the first and last rays do
    /// not sit exactly on the sensor boundary. Rebuilding the sensor is the
    /// only way to change `ray_count` or `spread`.
    ///
    /// Panics if `ray_count` is zero.
    pub fn with_spread(ray_count: usize, origin: Vec2, spread: f32, ray_length: f32) -> Self {
        assert!(ray_count >= 1, "a sensor needs at least one ray");

        let mut dirs = Vec::with_capacity(ray_count);
        for i in 0..ray_count {
            let t = if ray_count == 1 {
                1.0
            } else {
                i as f32 / (ray_count - 1) as f32
            };
            let angle = lerp(
                -spread / 2.0 + PI / ray_count as f32,
                spread / 2.0 - PI / ray_count as f32,
                t,
            );
            dirs.push(Vec2::from_angle(angle));
        }

        let mut sensor = Self {
            ray_count,
            origin,
            spread,
            ray_length,
            dirs,
            hits: vec![None; ray_count],
            min_t: vec![f32::INFINITY; ray_count],
        };
        sensor.reset_frame();
        sensor
    }

    #[inline]
    pub fn ray_count(&self) -> usize {
        self.ray_count
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn spread(&self) -> f32 {
        self.spread
    }

    #[inline]
    pub fn ray_length(&self) -> f32 {
        self.ray_length
    }

    /// Precomputed unit direction of ray `i`
    #[inline]
    pub fn ray_dir(&self, i: usize) -> Vec2 {
        self.dirs[i]
    }

    /// Nearest recorded hit per ray (`None` = no hit this frame)
    #[inline]
    pub fn hits(&self) -> &[Option<Vec2>] {
        &self.hits
    }

    /// Parametric distance of the nearest hit per ray
    #[inline]
    pub fn min_t(&self) -> &[f32] {
        &self.min_t
    }

    /// Iterator over this frame's recorded hit points
    pub fn hit_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.hits.iter().filter_map(|h| *h)
    }

    /// Re-anchor the sensor at its owner's (possibly moved) position.
    ///
    /// Called once per frame by the owning particle, after motion and
    /// collision response and before the frame's casts.
    #[inline]
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    /// Clear the per-frame hit buffers (no reallocation). Idempotent.
    pub fn reset_frame(&mut self) {
        self.hits.fill(None);
        self.min_t.fill(f32::INFINITY);
    }

    /// Cast every ray against one wall, keeping the nearest hit per ray.
    ///
    /// Cumulative across calls within a frame: one call per wall, and the
    /// strictly-smaller-t acceptance makes the final buffers independent of
    /// wall order.
    pub fn cast_against(&mut self, wall: &Wall) {
        let origin = self.origin;
        let ws = wall.start;
        let we = wall.end;

        for i in 0..self.ray_count {
            // A hit at the ray origin is already optimal
            if self.min_t[i] == 0.0 {
                continue;
            }

            let delta = self.dirs[i] * self.ray_length;
            let far = origin + delta;

            // Broad-phase: the ray segment's box vs the wall's precomputed box.
            // Only rules out definite misses.
            if !Aabb::from_segment(origin, far).overlaps(&wall.aabb) {
                continue;
            }

            // Parametric segment-segment intersection: t on the ray, u on the wall
            let denominator =
                (origin.x - far.x) * (ws.y - we.y) - (origin.y - far.y) * (ws.x - we.x);
            if denominator == 0.0 {
                // Parallel; no intersection recorded
                continue;
            }

            let t = ((origin.x - ws.x) * (ws.y - we.y) - (origin.y - ws.y) * (ws.x - we.x))
                / denominator;
            let u = ((origin.x - ws.x) * (origin.y - far.y)
                - (origin.y - ws.y) * (origin.x - far.x))
                / denominator;

            if t > 0.0 && t <= 1.0 && (0.0..=1.0).contains(&u) && t < self.min_t[i] {
                self.min_t[i] = t;
                self.hits[i] = Some(origin + delta * t);

                // Numerical-stability floor: near-origin hits become exact
                // origin hits so jitter across frames cannot flip the winner
                if t <= T_ORIGIN_EPSILON {
                    self.min_t[i] = 0.0;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_are_unit_vectors() {
        for count in [1, 2, 3, 8, 100, 1000] {
            let sensor = RaySensor::new(count, Vec2::ZERO);
            for i in 0..count {
                let d = sensor.ray_dir(i);
                assert!(
                    (d.x * d.x + d.y * d.y - 1.0).abs() < 1e-5,
                    "ray {i} of {count} is not unit length"
                );
            }
        }
    }

    #[test]
    #[should_panic(expected = "at least one ray")]
    fn test_zero_rays_rejected() {
        RaySensor::new(0, Vec2::ZERO);
    }

    #[test]
    fn test_single_ray_cast_straight_down() {
        // spread of 3π puts the lone ray at spread/2 - π = π/2, pointing +y
        let mut sensor = RaySensor::with_spread(1, Vec2::new(100.0, 0.0), 3.0 * PI, 150.0);
        assert!((sensor.ray_dir(0) - Vec2::new(0.0, 1.0)).length() < 1e-5);

        let wall = Wall::new(Vec2::new(0.0, 100.0), Vec2::new(200.0, 100.0));
        sensor.cast_against(&wall);

        assert!((sensor.min_t()[0] - 100.0 / 150.0).abs() < 1e-5);
        let hit = sensor.hits()[0].expect("ray should hit the wall");
        assert!((hit - Vec2::new(100.0, 100.0)).length() < 1e-3);
    }

    #[test]
    fn test_single_ray_default_spread_points_along_x() {
        // With the full-circle default, the inset formula lands ray 0 on angle 0
        let mut sensor = RaySensor::with_spread(1, Vec2::new(100.0, 0.0), TAU, 150.0);
        assert!((sensor.ray_dir(0) - Vec2::new(1.0, 0.0)).length() < 1e-5);

        let wall = Wall::new(Vec2::new(200.0, -100.0), Vec2::new(200.0, 100.0));
        sensor.cast_against(&wall);

        assert!((sensor.min_t()[0] - 100.0 / 150.0).abs() < 1e-5);
        let hit = sensor.hits()[0].expect("ray should hit the wall");
        assert!((hit - Vec2::new(200.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_out_of_range_wall_not_hit() {
        // Wall past the 150-unit ray length
        let mut sensor = RaySensor::with_spread(1, Vec2::ZERO, TAU, 150.0);
        let wall = Wall::new(Vec2::new(200.0, -50.0), Vec2::new(200.0, 50.0));
        sensor.cast_against(&wall);
        assert!(sensor.hits()[0].is_none());
        assert_eq!(sensor.min_t()[0], f32::INFINITY);
    }

    #[test]
    fn test_nearest_wall_wins_regardless_of_order() {
        let near = Wall::new(Vec2::new(50.0, -50.0), Vec2::new(50.0, 50.0));
        let far = Wall::new(Vec2::new(120.0, -50.0), Vec2::new(120.0, 50.0));

        let mut a = RaySensor::with_spread(1, Vec2::ZERO, TAU, 150.0);
        a.cast_against(&near);
        a.cast_against(&far);

        let mut b = RaySensor::with_spread(1, Vec2::ZERO, TAU, 150.0);
        b.cast_against(&far);
        b.cast_against(&near);

        assert_eq!(a.hits()[0], b.hits()[0]);
        assert!((a.min_t()[0] - 50.0 / 150.0).abs() < 1e-5);
        let hit = a.hits()[0].unwrap();
        assert!((hit - Vec2::new(50.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_parallel_wall_skipped() {
        // Wall parallel to the ray and overlapping its bounding box
        let mut sensor = RaySensor::with_spread(1, Vec2::ZERO, TAU, 150.0);
        let wall = Wall::new(Vec2::new(10.0, 0.0), Vec2::new(140.0, 0.0));
        sensor.cast_against(&wall);
        assert!(sensor.hits()[0].is_none());
    }

    #[test]
    fn test_reset_frame_idempotent() {
        let mut sensor = RaySensor::with_spread(4, Vec2::ZERO, TAU, 150.0);
        let wall = Wall::new(Vec2::new(50.0, -200.0), Vec2::new(50.0, 200.0));
        sensor.cast_against(&wall);
        assert!(sensor.hit_points().count() > 0);

        sensor.reset_frame();
        sensor.reset_frame();
        for i in 0..4 {
            assert!(sensor.hits()[i].is_none());
            assert_eq!(sensor.min_t()[i], f32::INFINITY);
        }
    }

    #[test]
    fn test_near_origin_hit_clamps_to_zero() {
        let origin = Vec2::new(100.0, 0.0);
        let mut sensor = RaySensor::with_spread(1, origin, TAU, 150.0);
        // Vertical wall a hair in front of the origin
        let wall = Wall::new(Vec2::new(100.0 + 1e-5, -10.0), Vec2::new(100.0 + 1e-5, 10.0));
        sensor.cast_against(&wall);
        assert_eq!(sensor.min_t()[0], 0.0);

        // Once clamped, later walls cannot displace the hit
        let near = Wall::new(Vec2::new(100.5, -10.0), Vec2::new(100.5, 10.0));
        let before = sensor.hits()[0];
        sensor.cast_against(&near);
        assert_eq!(sensor.hits()[0], before);
    }
}
