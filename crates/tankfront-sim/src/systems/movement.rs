//! Tank movement: rotation, wall-constrained translation, and boundary clamping.
//!
//! No inertia. A step is applied in full or, per axis, not at all.

use glam::DVec2;

use tankfront_core::commands::InputIntents;
use tankfront_core::components::Tank;
use tankfront_core::constants::{PLAYER_CLAMP_SLACK, ROTATION_STEP, TILE_SIZE};
use tankfront_core::types::{heading_vector, Aabb};

use crate::arena::Arena;

/// How a tank is kept inside the arena after wall resolution.
///
/// The player is held one tile (plus slack) inside the edges while enemies
/// may run right up to them. The asymmetry is part of the gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryClamp {
    PlayerInset,
    ArenaEdges,
}

impl BoundaryClamp {
    pub fn apply(self, tank: &mut Tank, arena: &Arena) {
        let margin = match self {
            BoundaryClamp::PlayerInset => TILE_SIZE + PLAYER_CLAMP_SLACK,
            BoundaryClamp::ArenaEdges => 0.0,
        };
        let max_x = arena.width - margin - tank.size;
        let max_y = arena.height - margin - tank.size;
        tank.position.x = tank.position.x.min(max_x).max(margin);
        tank.position.y = tank.position.y.min(max_y).max(margin);
    }
}

/// Rotation and drive step requested by the player's intents.
/// Returns the candidate displacement; orientation is updated in place.
pub fn steer(tank: &mut Tank, intents: &InputIntents) -> DVec2 {
    if intents.rotate_left {
        tank.orientation -= ROTATION_STEP;
    }
    if intents.rotate_right {
        tank.orientation += ROTATION_STEP;
    }

    let heading = heading_vector(tank.orientation) * tank.speed;
    let mut step = DVec2::ZERO;
    if intents.forward {
        step += heading;
    }
    if intents.backward {
        step -= heading;
    }
    step
}

/// Apply a candidate displacement, testing X and Y independently against the
/// walls so a tank blocked on one axis still slides along the other.
pub fn resolve_step(tank: &mut Tank, step: DVec2, arena: &Arena) {
    let candidate = tank.position + step;

    let x_probe = Aabb::square(DVec2::new(candidate.x, tank.position.y), tank.size);
    if !arena.collides_with_walls(&x_probe) {
        tank.position.x = candidate.x;
    }

    let y_probe = Aabb::square(DVec2::new(tank.position.x, candidate.y), tank.size);
    if !arena.collides_with_walls(&y_probe) {
        tank.position.y = candidate.y;
    }
}

/// Full player movement for one tick.
pub fn move_player(tank: &mut Tank, intents: &InputIntents, arena: &Arena) {
    let step = steer(tank, intents);
    resolve_step(tank, step, arena);
    BoundaryClamp::PlayerInset.apply(tank, arena);
}
