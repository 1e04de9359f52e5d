//! Deterministic simulation module
//!
//! The per-frame ray/wall intersection core lives here. This module must be
//! pure and deterministic:
//! - Fixed unit timestep only
//! - Seeded RNG only, and only during world construction
//! - No rendering or platform dependencies

pub mod geometry;
pub mod particle;
pub mod sensor;
pub mod wall;
pub mod world;

pub use geometry::{CircleContact, circle_wall_collision, reflect, reflect_velocity, segments_intersect, wall_normal};
pub use particle::Particle;
pub use sensor::RaySensor;
pub use wall::{Aabb, Wall};
pub use world::{World, WorldConfig};
