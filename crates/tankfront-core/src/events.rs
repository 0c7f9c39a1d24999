//! Events emitted by the simulation for display and audio layers.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EndCause, Side};

/// Something notable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    /// A tank fired. `slot` is the enemy slot, `None` for the player.
    ShotFired { side: Side, slot: Option<u32> },
    /// A projectile struck a wall and was destroyed.
    WallHit { owner: Side, position: DVec2 },
    /// A flag took damage.
    FlagHit { flag: Side, health: u32 },
    /// A tank took damage without being destroyed.
    TankHit {
        side: Side,
        slot: Option<u32>,
        health: u32,
    },
    /// An enemy was destroyed and removed from play.
    EnemyDestroyed { slot: u32, score: u32 },
    /// The player tank reached zero health.
    PlayerDestroyed,
    /// Emitted exactly once per match.
    MatchOver(MatchOutcome),
}

/// Final result of a match, for the game-over display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: Side,
    pub cause: EndCause,
    pub score: u32,
    /// Tick on which the terminal condition was detected.
    pub tick: u64,
}

impl MatchOutcome {
    pub fn new(cause: EndCause, score: u32, tick: u64) -> Self {
        Self {
            winner: cause.winner(),
            cause,
            score,
            tick,
        }
    }

    /// Banner text for the game-over screen.
    pub fn headline(&self) -> &'static str {
        match self.winner {
            Side::Player => "Player Wins!",
            Side::Enemy => "Enemy Wins!",
        }
    }
}
