//! Arena: static bounds plus the immutable wall set, shared read-only by every system.

use glam::DVec2;

use tankfront_core::components::Wall;
use tankfront_core::constants::{ARENA_HEIGHT, ARENA_WIDTH};
use tankfront_core::types::Aabb;

#[derive(Debug, Clone)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
    walls: Vec<Wall>,
}

impl Arena {
    pub fn new(walls: Vec<Wall>) -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            walls,
        }
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// True if `bounds` overlaps any wall. Pure; an empty wall set never collides.
    pub fn collides_with_walls(&self, bounds: &Aabb) -> bool {
        self.walls.iter().any(|wall| wall.bounds.intersects(bounds))
    }

    /// True if a point has left the arena on any axis. Points on the edge are still inside.
    pub fn is_out_of_bounds(&self, point: DVec2) -> bool {
        point.x < 0.0 || point.x > self.width || point.y < 0.0 || point.y > self.height
    }
}
