//! Property-based checks for the ray casting core

use std::f32::consts::TAU;

use glam::Vec2;
use proptest::prelude::*;

use rayfield::sim::{RaySensor, Wall, reflect_velocity, wall_normal};

/// A non-degenerate wall from four coordinates plus a non-zero extent
fn wall_strategy(range: std::ops::Range<f32>) -> impl Strategy<Value = Wall> {
    (
        range.clone(),
        range.clone(),
        range.clone(),
        range,
    )
        .prop_filter("wall endpoints must be distinct", |(x1, y1, x2, y2)| {
            (x1, y1) != (x2, y2)
        })
        .prop_map(|(x1, y1, x2, y2)| Wall::new(Vec2::new(x1, y1), Vec2::new(x2, y2)))
}

proptest! {
    #[test]
    fn precomputed_directions_are_unit_vectors(
        ray_count in 1usize..64,
        spread in 0.1f32..(1.5 * TAU),
    ) {
        let sensor = RaySensor::with_spread(ray_count, Vec2::ZERO, spread, 150.0);
        for i in 0..ray_count {
            let d = sensor.ray_dir(i);
            prop_assert!((d.x * d.x + d.y * d.y - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn wall_order_does_not_change_final_hits(
        walls in prop::collection::vec(wall_strategy(-200.0..200.0), 1..8),
    ) {
        let mut forward = RaySensor::with_spread(16, Vec2::ZERO, TAU, 150.0);
        for wall in &walls {
            forward.cast_against(wall);
        }

        let mut reversed = RaySensor::with_spread(16, Vec2::ZERO, TAU, 150.0);
        for wall in walls.iter().rev() {
            reversed.cast_against(wall);
        }

        prop_assert_eq!(forward.hits(), reversed.hits());
        prop_assert_eq!(forward.min_t(), reversed.min_t());
    }

    #[test]
    fn disjoint_bounding_boxes_never_hit(
        x1 in -400.0f32..400.0,
        x2 in -400.0f32..400.0,
        y1 in 1.0f32..400.0,
        y2 in 1.0f32..400.0,
    ) {
        // Single ray along +x from the origin: its bounding box is
        // [0, 150] x [0, 0]. Walls strictly above y = 0 cannot overlap it.
        let mut sensor = RaySensor::with_spread(1, Vec2::ZERO, TAU, 150.0);
        prop_assume!((x1, y1) != (x2, y2));
        let wall = Wall::new(Vec2::new(x1, y1), Vec2::new(x2, y2));

        sensor.cast_against(&wall);
        prop_assert!(sensor.hits()[0].is_none());
        prop_assert_eq!(sensor.min_t()[0], f32::INFINITY);
    }

    #[test]
    fn reflection_flips_normal_and_keeps_tangent(
        vx in -50.0f32..50.0,
        vy in -50.0f32..50.0,
        wall in wall_strategy(-100.0..100.0),
    ) {
        let v = Vec2::new(vx, vy);
        let n = wall_normal(&wall);
        let r = reflect_velocity(v, &wall);

        // Tolerance scales with the magnitudes involved
        let tol = 1e-3 * (1.0 + v.length());
        prop_assert!((r.dot(n) + v.dot(n)).abs() < tol);
        let v_tan = v - v.dot(n) * n;
        let r_tan = r - r.dot(n) * n;
        prop_assert!((v_tan - r_tan).length() < tol);
    }

    #[test]
    fn casting_never_records_t_outside_unit_range(
        walls in prop::collection::vec(wall_strategy(-300.0..300.0), 1..6),
    ) {
        let mut sensor = RaySensor::with_spread(8, Vec2::ZERO, TAU, 150.0);
        for wall in &walls {
            sensor.cast_against(wall);
        }
        for (i, t) in sensor.min_t().iter().enumerate() {
            if sensor.hits()[i].is_some() {
                prop_assert!((0.0..=1.0).contains(t));
            } else {
                prop_assert_eq!(*t, f32::INFINITY);
            }
        }
    }
}
