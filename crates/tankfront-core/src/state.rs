//! Match state snapshot: the complete visible state handed to the renderer each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{AiMode, MatchPhase, Side};
use crate::events::{MatchEvent, MatchOutcome};
use crate::types::{Aabb, SimTime};

/// Complete read-only view of the match after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    pub score: ScoreView,
    /// `None` only if the player entity is missing, which a running match never allows.
    pub player: Option<TankView>,
    /// Live enemies, in slot order.
    pub enemies: Vec<TankView>,
    pub projectiles: Vec<ProjectileView>,
    pub walls: Vec<Aabb>,
    pub flags: Vec<FlagView>,
    pub events: Vec<MatchEvent>,
    pub outcome: Option<MatchOutcome>,
}

/// A tank as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankView {
    pub side: Side,
    /// Enemy slot; `None` for the player.
    pub slot: Option<u32>,
    pub position: DVec2,
    pub size: f64,
    pub orientation: f64,
    pub health: u32,
    /// Only meaningful for enemies.
    pub mode: Option<AiMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub owner: Side,
    pub position: DVec2,
    pub size: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagView {
    pub side: Side,
    pub position: DVec2,
    pub size: f64,
    pub health: u32,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub enemies_destroyed: u32,
    pub enemies_remaining: u32,
    pub shots_fired: u32,
}
