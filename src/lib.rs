//! Rayfield - a 2D ray-casting particle sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (walls, particles, ray sensors)
//! - `render`: The rendering-sink seam (geometry + color out, no pixels)
//! - `overlay`: Optional visual layers fed by the frame's hit-point cloud
//! - `settings`: Run configuration with JSON load/save

pub mod overlay;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{Particle, RaySensor, Wall, World, WorldConfig};

/// Simulation constants
pub mod consts {
    /// Particle disc radius in world units
    pub const PARTICLE_RADIUS: f32 = 5.0;
    /// Particle speed (world units per frame, fixed unit timestep)
    pub const PARTICLE_SPEED: f32 = 3.0;

    /// Maximum ray cast distance
    pub const RAY_LENGTH: f32 = 150.0;
    /// Default number of rays per sensor
    pub const DEFAULT_RAY_COUNT: usize = 1000;

    /// Interior (non-border) walls placed at world construction
    pub const INTERIOR_WALL_COUNT: usize = 6;
    /// Placement attempts per interior wall before giving up on the slot
    pub const WALL_PLACEMENT_ATTEMPTS: usize = 64;

    /// Hits with a ray parameter at or below this are clamped to t = 0
    pub const T_ORIGIN_EPSILON: f32 = 1e-6;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Remap `v` from [in_min, in_max] to [out_min, out_max] (unclamped)
#[inline]
pub fn map_range(v: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    lerp(out_min, out_max, (v - in_min) / (in_max - in_min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        // Reversed output range, as used by the mesh alpha falloff
        assert_eq!(map_range(80.0, 0.0, 80.0, 90.0, 10.0), 10.0);
        assert_eq!(map_range(0.0, 0.0, 80.0, 90.0, 10.0), 90.0);
    }
}
