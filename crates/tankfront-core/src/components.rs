//! ECS components and static world pieces.
//!
//! Components are plain data structs with no game logic.
//! Game logic lives in systems, not components.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::Side;
use crate::types::Aabb;

/// Shared tank record for the player and every enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    /// Top-left corner of the hit box.
    pub position: DVec2,
    /// Side length of the square hit box.
    pub size: f64,
    /// Orientation in radians. Unbounded; only ever fed to sin/cos.
    pub orientation: f64,
    pub speed: f64,
    /// Always within `0..=TANK_MAX_HEALTH`.
    pub health: u32,
    /// Projectiles fired by this tank, oldest first. Owned exclusively.
    pub projectiles: Vec<Projectile>,
}

impl Tank {
    pub fn new(position: DVec2, orientation: f64) -> Self {
        Self {
            position,
            size: TANK_SIZE,
            orientation,
            speed: TANK_SPEED,
            health: TANK_MAX_HEALTH,
            projectiles: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.position, self.size)
    }

    pub fn center(&self) -> DVec2 {
        self.position + DVec2::splat(self.size * 0.5)
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }
}

/// Marks the player-controlled tank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerTank;

/// Marks an AI-controlled tank. `slot` is its spawn index, used for stable ordering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyTank {
    pub slot: u32,
}

/// AI timing state, attached only to enemy tanks.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AiState {
    /// Tick of the most recent shot. `None` until the first one.
    pub last_shot_tick: Option<u64>,
    /// Mode chosen on the most recent tick, kept for display.
    pub mode: crate::enums::AiMode,
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Top-left corner of the hit box.
    pub position: DVec2,
    pub size: f64,
    /// Fixed at spawn.
    pub orientation: f64,
    pub speed: f64,
    pub owner: Side,
}

impl Projectile {
    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.position, self.size)
    }
}

/// Static obstacle, one per wall tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub bounds: Aabb,
}

/// A base flag. Destroyed at zero health, which ends the match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flag {
    pub side: Side,
    pub position: DVec2,
    pub size: f64,
    pub health: u32,
}

impl Flag {
    pub fn new(side: Side, position: DVec2) -> Self {
        Self {
            side,
            position,
            size: TILE_SIZE,
            health: FLAG_MAX_HEALTH,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.position, self.size)
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }
}
