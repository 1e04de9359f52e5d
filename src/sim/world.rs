//! Simulation context: wall list, particle list, and the frame driver
//!
//! Owns everything the per-frame core touches. Construction is deterministic
//! per seed; the RNG is used only for placement and never inside a frame.

use glam::Vec2;
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_RAY_COUNT, INTERIOR_WALL_COUNT, WALL_PLACEMENT_ATTEMPTS};
use super::geometry::segments_intersect;
use super::particle::Particle;
use super::wall::Wall;

/// World construction parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    /// Random non-crossing walls placed inside the border
    pub interior_walls: usize,
    /// Rays per particle sensor
    pub ray_count: usize,
    pub particle_count: usize,
    /// Seed for deterministic placement
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            interior_walls: INTERIOR_WALL_COUNT,
            ray_count: DEFAULT_RAY_COUNT,
            particle_count: 1,
            seed: 12345,
        }
    }
}

/// The complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub config: WorldConfig,
    pub walls: Vec<Wall>,
    pub particles: Vec<Particle>,
}

impl World {
    /// Build a world: interior walls, border walls, then particles.
    ///
    /// Candidate interior walls that cross (or run parallel to) an already
    /// placed wall are rejected and redrawn, up to a bounded number of
    /// attempts per slot.
    pub fn new(config: WorldConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let (w, h) = (config.width, config.height);

        let mut walls: Vec<Wall> = Vec::with_capacity(config.interior_walls + 4);
        for slot in 0..config.interior_walls {
            let mut placed = false;
            for _ in 0..WALL_PLACEMENT_ATTEMPTS {
                let a = Vec2::new(rng.random_range(0.0..w), rng.random_range(0.0..h));
                let b = Vec2::new(rng.random_range(0.0..w), rng.random_range(0.0..h));
                if a == b {
                    continue;
                }
                let crosses = walls
                    .iter()
                    .any(|wall| segments_intersect(wall.start, wall.end, a, b));
                if crosses {
                    continue;
                }
                walls.push(Wall::new(a, b));
                placed = true;
                break;
            }
            if !placed {
                warn!("gave up placing interior wall {slot} after {WALL_PLACEMENT_ATTEMPTS} attempts");
            }
        }

        // Border walls, counterclockwise from the left edge
        walls.push(Wall::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, h)));
        walls.push(Wall::new(Vec2::new(0.0, h), Vec2::new(w, h)));
        walls.push(Wall::new(Vec2::new(w, h), Vec2::new(w, 0.0)));
        walls.push(Wall::new(Vec2::new(w, 0.0), Vec2::new(0.0, 0.0)));

        let particles = (0..config.particle_count)
            .map(|_| {
                let pos = Vec2::new(rng.random_range(0.0..w), rng.random_range(0.0..h));
                let heading = rng.random_range(0.0..std::f32::consts::TAU);
                Particle::new(pos, heading, config.ray_count)
            })
            .collect();

        info!(
            "world ready: {} walls ({} interior), {} particle(s), {} rays each",
            walls.len(),
            walls.len() - 4,
            config.particle_count,
            config.ray_count
        );

        World {
            config,
            walls,
            particles,
        }
    }

    /// Tear down and rebuild everything for a new surface size.
    ///
    /// Reseeds from the stored seed, so two resets to the same size produce
    /// identical worlds.
    pub fn reset(&mut self, width: f32, height: f32) {
        let mut config = self.config.clone();
        config.width = width;
        config.height = height;
        *self = World::new(config);
    }

    /// Advance one atomic frame: integrate and collide every particle, then
    /// cast every particle against every wall.
    ///
    /// After `step` returns, each sensor holds the frame's nearest hits; they
    /// stay valid until the next `step`.
    pub fn step(&mut self) {
        let walls = &self.walls;
        for particle in &mut self.particles {
            particle.update(walls);
        }
        for particle in &mut self.particles {
            for wall in walls {
                particle.cast_ray(wall);
            }
        }
        debug!("frame cast complete: {} hit points", self.count_hits());
    }

    /// Collect the frame's hit-point cloud across all particles
    pub fn hit_points(&self) -> Vec<Vec2> {
        self.particles
            .iter()
            .flat_map(|p| p.hit_points())
            .collect()
    }

    fn count_hits(&self) -> usize {
        self.particles.iter().map(|p| p.hit_points().count()).sum()
    }
}
