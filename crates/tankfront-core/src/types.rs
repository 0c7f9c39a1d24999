//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in arena space (pixels, y grows downward).
///
/// `min` is the top-left corner. Every collidable entity (tank, wall, flag,
/// projectile) is tested through one of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: DVec2,
    pub size: DVec2,
}

impl Aabb {
    pub fn new(min: DVec2, size: DVec2) -> Self {
        Self { min, size }
    }

    /// Square box of side `side` with its top-left corner at `min`.
    pub fn square(min: DVec2, side: f64) -> Self {
        Self {
            min,
            size: DVec2::splat(side),
        }
    }

    pub fn max(&self) -> DVec2 {
        self.min + self.size
    }

    pub fn center(&self) -> DVec2 {
        self.min + self.size * 0.5
    }

    /// Overlap test with strict inequalities on all four edges.
    /// Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.min.x + other.size.x
            && self.min.x + self.size.x > other.min.x
            && self.min.y < other.min.y + other.size.y
            && self.min.y + self.size.y > other.min.y
    }
}

/// Free-function form of [`Aabb::intersects`].
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    a.intersects(b)
}

/// Unit vector for an orientation angle (radians, 0 = +x, positive = clockwise on screen).
pub fn heading_vector(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each executed tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 * self.dt();
    }
}
