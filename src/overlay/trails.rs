//! Fading trails: soft dots that accumulate on a persistent surface
//!
//! The layer itself holds no pixels. Each frame it emits a translucent black
//! rect over the whole surface (the fade) followed by this frame's dots; the
//! sink it draws into must represent an offscreen buffer that persists
//! between frames, or no trail will build up.

use glam::Vec2;

use crate::render::{Color, RenderSink};

#[derive(Debug, Clone)]
pub struct TrailsLayer {
    pub enabled: bool,
    /// Fade alpha per frame; smaller means longer trails
    pub fade: u8,
    /// Dot radius
    pub radius: f32,
    width: f32,
    height: f32,
}

impl TrailsLayer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            enabled: false,
            fade: 12,
            radius: 3.0,
            width,
            height,
        }
    }

    /// Track a new surface size (the owner recreates the actual buffer)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Fade the previous frame and stamp this frame's points
    pub fn add(&self, points: &[Vec2], particle_pos: Option<Vec2>, sink: &mut dyn RenderSink) {
        if !self.enabled {
            return;
        }

        sink.fill_rect(
            Vec2::ZERO,
            Vec2::new(self.width, self.height),
            Color::rgba(0, 0, 0, self.fade),
        );

        let dot = Color::rgba(120, 200, 255, 45);
        for p in points {
            sink.circle(*p, self.radius * 2.0, dot);
        }

        if let Some(pos) = particle_pos {
            // Particle glow trail
            sink.circle(pos, self.radius * 3.0, Color::rgba(255, 255, 255, 30));
        }
    }
}
