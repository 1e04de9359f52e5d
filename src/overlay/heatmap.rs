//! Decaying hit-density heatmap over a coarse grid

use glam::Vec2;

use crate::lerp;
use crate::render::{Color, RenderSink};

/// Accumulates hit points into grid cells that decay every frame
#[derive(Debug, Clone)]
pub struct HeatmapLayer {
    pub enabled: bool,
    pub cell_size: f32,
    /// Per-frame multiplicative decay
    pub decay: f32,
    cols: usize,
    rows: usize,
    grid: Vec<f32>,
    /// Running peak, used for normalization
    max_observed: f32,
}

impl HeatmapLayer {
    pub fn new(width: f32, height: f32, cell_size: f32) -> Self {
        let cols = (width / cell_size).ceil() as usize;
        let rows = (height / cell_size).ceil() as usize;
        Self {
            enabled: false,
            cell_size,
            decay: 0.985,
            cols,
            rows,
            grid: vec![0.0; cols * rows],
            max_observed: 1.0,
        }
    }

    fn index_from_xy(&self, p: Vec2) -> usize {
        let max_x = self.cols as f32 * self.cell_size - 1.0;
        let max_y = self.rows as f32 * self.cell_size - 1.0;
        let cx = (p.x.clamp(0.0, max_x) / self.cell_size).floor() as usize;
        let cy = (p.y.clamp(0.0, max_y) / self.cell_size).floor() as usize;
        cy * self.cols + cx
    }

    /// Bin this frame's hit points
    pub fn add(&mut self, points: &[Vec2]) {
        if !self.enabled {
            return;
        }
        for p in points {
            let idx = self.index_from_xy(*p);
            self.grid[idx] += 1.0;
            if self.grid[idx] > self.max_observed {
                self.max_observed = self.grid[idx];
            }
        }
    }

    /// Rebuild the grid for a new surface size, dropping accumulated heat
    pub fn resize(&mut self, width: f32, height: f32) {
        self.cols = (width / self.cell_size).ceil() as usize;
        self.rows = (height / self.cell_size).ceil() as usize;
        self.grid = vec![0.0; self.cols * self.rows];
        self.max_observed = 1.0;
    }

    /// Decay every cell, then draw the ones still above the noise floor
    pub fn update_and_render(&mut self, sink: &mut dyn RenderSink) {
        if !self.enabled {
            return;
        }

        for v in &mut self.grid {
            *v *= self.decay;
        }

        for y in 0..self.rows {
            for x in 0..self.cols {
                let v = self.grid[y * self.cols + x];
                if v <= 0.05 {
                    continue;
                }
                // Soft-cap normalization so a single hot cell doesn't dim the rest
                let t = (v / (self.max_observed * 0.6)).clamp(0.0, 1.0);
                let c = Self::heat_color(t);
                sink.fill_rect(
                    Vec2::new(x as f32 * self.cell_size, y as f32 * self.cell_size),
                    Vec2::splat(self.cell_size),
                    Color::rgba(c.r, c.g, c.b, 140),
                );
            }
        }
    }

    pub fn clear(&mut self) {
        self.grid.fill(0.0);
        self.max_observed = 1.0;
    }

    /// 5-stop gradient: navy -> blue -> cyan -> yellow -> red
    pub fn heat_color(t: f32) -> Color {
        const STOPS: [(f32, f32, f32); 5] = [
            (0.0, 0.0, 40.0),
            (0.0, 90.0, 255.0),
            (0.0, 255.0, 255.0),
            (255.0, 255.0, 0.0),
            (255.0, 60.0, 0.0),
        ];

        let n = STOPS.len() - 1;
        let scaled = t.clamp(0.0, 1.0) * n as f32;
        let i = (scaled.floor() as usize).min(n);
        let frac = (scaled - i as f32).clamp(0.0, 1.0);
        let a = STOPS[i];
        let b = STOPS[(i + 1).min(n)];

        Color::rgb(
            lerp(a.0, b.0, frac) as u8,
            lerp(a.1, b.1, frac) as u8,
            lerp(a.2, b.2, frac) as u8,
        )
    }
}
