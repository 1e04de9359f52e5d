//! Particle motion, wall collision response, and ray casting

use glam::Vec2;

use crate::consts::{PARTICLE_RADIUS, PARTICLE_SPEED};
use super::geometry::{circle_wall_collision, reflect_velocity};
use super::sensor::RaySensor;
use super::wall::Wall;

/// A moving disc that owns a ray sensor
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
    pub sensor: RaySensor,
}

impl Particle {
    /// Spawn a particle at `pos` heading in direction `heading` (radians) at
    /// the standard speed.
    pub fn new(pos: Vec2, heading: f32, ray_count: usize) -> Self {
        Self {
            pos,
            radius: PARTICLE_RADIUS,
            vel: Vec2::from_angle(heading) * PARTICLE_SPEED,
            sensor: RaySensor::new(ray_count, pos),
        }
    }

    /// Advance one frame: integrate, then resolve wall collisions.
    ///
    /// Collision response is an elastic-bounce approximation: on contact the
    /// velocity reflects off the wall normal and the position is pushed once
    /// by the new velocity so the particle does not sink into the wall next
    /// frame. Several walls touching in the same frame are each handled in
    /// wall-list order with no reconciliation of conflicting normals; corner
    /// cases get approximate but acceptable responses.
    ///
    /// Afterwards the sensor is re-anchored at the final position and its
    /// per-frame hit buffers are reset, ready for this frame's casts. Readers
    /// of the previous frame's hits must consume them before calling this.
    pub fn update(&mut self, walls: &[Wall]) {
        self.pos += self.vel;

        for wall in walls {
            let contact = circle_wall_collision(self.pos, self.radius, wall);
            if contact.hit {
                self.vel = reflect_velocity(self.vel, wall);
                self.pos += self.vel;
            }
        }

        self.sensor.set_origin(self.pos);
        self.sensor.reset_frame();
    }

    /// Cast the sensor's rays against one wall, accumulating nearest hits
    #[inline]
    pub fn cast_ray(&mut self, wall: &Wall) {
        self.sensor.cast_against(wall);
    }

    /// This frame's recorded hit points
    pub fn hit_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.sensor.hit_points()
    }
}
