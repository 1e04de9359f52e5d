//! Proximity mesh: connects nearby hit points with distance-faded lines

use glam::Vec2;

use crate::map_range;
use crate::render::{Color, RenderSink};

/// Connects each hit point to its nearest neighbors within a radius
#[derive(Debug, Clone)]
pub struct MeshNetwork {
    pub enabled: bool,
    /// Connection radius
    pub max_dist: f32,
    /// Nearest neighbors drawn per point
    pub max_neighbors: usize,
    /// Line alpha at zero distance; fades to 10 at `max_dist`
    pub stroke_alpha: u8,
}

impl Default for MeshNetwork {
    fn default() -> Self {
        Self {
            enabled: true,
            max_dist: 80.0,
            max_neighbors: 3,
            stroke_alpha: 90,
        }
    }
}

impl MeshNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw connections for this frame's point cloud
    pub fn render(&self, points: &[Vec2], sink: &mut dyn RenderSink) {
        if !self.enabled || points.len() < 2 {
            return;
        }

        let max_d2 = self.max_dist * self.max_dist;
        let mut neighbors: Vec<(usize, f32)> = Vec::new();

        for (i, pi) in points.iter().enumerate() {
            neighbors.clear();
            for (j, pj) in points.iter().enumerate().skip(i + 1) {
                let d2 = pi.distance_squared(*pj);
                if d2 <= max_d2 {
                    neighbors.push((j, d2));
                }
            }

            neighbors.sort_by(|a, b| a.1.total_cmp(&b.1));
            for &(j, d2) in neighbors.iter().take(self.max_neighbors) {
                let d = d2.sqrt();
                let alpha = map_range(d, 0.0, self.max_dist, self.stroke_alpha as f32, 10.0);
                let color = Color::rgba(100, 180, 255, alpha as u8);
                sink.line(*pi, points[j], color);
            }
        }
    }
}
