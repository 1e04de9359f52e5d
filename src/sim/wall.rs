//! Static wall obstacles and their broad-phase bounding boxes

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Bounding box of a segment. `min ≤ max` componentwise by construction.
    pub fn from_segment(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Axis-aligned overlap test (touching counts as overlapping)
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// A static line obstacle.
///
/// Walls never move, so the bounding box is computed once at construction and
/// reused by every broad-phase check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wall {
    pub start: Vec2,
    pub end: Vec2,
    pub aabb: Aabb,
}

impl Wall {
    /// Create a wall between two distinct points.
    ///
    /// Panics if the endpoints coincide: a zero-length wall has no normal and
    /// would poison velocity reflection with NaN.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        assert!(
            start != end,
            "wall endpoints must be distinct (zero-length walls have no normal)"
        );
        Self {
            start,
            end,
            aabb: Aabb::from_segment(start, end),
        }
    }

    /// Wall direction vector (not normalized)
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.direction().length()
    }
}
