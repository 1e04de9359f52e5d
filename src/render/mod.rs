//! Rendering seam
//!
//! The core never touches pixels: it emits lines, circles, and filled rects
//! with RGBA colors through the `RenderSink` trait, and whatever owns the
//! actual surface rasterizes them. `DrawList` is a recording sink used by the
//! demo binary and by tests.

use glam::Vec2;

use crate::sim::World;

/// An RGBA color with 0-255 channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

/// A single recorded draw request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCmd {
    Line { from: Vec2, to: Vec2, color: Color },
    Circle { center: Vec2, diameter: f32, color: Color },
    FillRect { pos: Vec2, size: Vec2, color: Color },
}

/// Receiver for the core's draw requests
pub trait RenderSink {
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn circle(&mut self, center: Vec2, diameter: f32, color: Color);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
}

/// A sink that records draw commands into a list
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    pub commands: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl RenderSink for DrawList {
    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.commands.push(DrawCmd::Line { from, to, color });
    }

    fn circle(&mut self, center: Vec2, diameter: f32, color: Color) {
        self.commands.push(DrawCmd::Circle {
            center,
            diameter,
            color,
        });
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCmd::FillRect { pos, size, color });
    }
}

/// Faint white used for the ray lines
const RAY_COLOR: Color = Color::rgba(255, 255, 255, 50);

/// Emit one frame of the base scene: background, walls, particles, and a
/// faint line from each sensor origin to each recorded hit.
pub fn draw_world(world: &World, sink: &mut dyn RenderSink) {
    sink.fill_rect(
        Vec2::ZERO,
        Vec2::new(world.config.width, world.config.height),
        Color::BLACK,
    );

    for wall in &world.walls {
        sink.line(wall.start, wall.end, Color::WHITE);
    }

    for particle in &world.particles {
        let origin = particle.sensor.origin();
        for hit in particle.hit_points() {
            sink.line(origin, hit, RAY_COLOR);
        }
        sink.circle(particle.pos, particle.radius * 2.0, Color::WHITE);
    }
}
