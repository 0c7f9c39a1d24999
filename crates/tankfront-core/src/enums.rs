//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The two opposing sides. Also tags projectile ownership and flag allegiance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Enemy behavior mode, keyed on distance to the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiMode {
    /// Close the distance, slow fire rate.
    #[default]
    Far,
    /// Strafe around the player, fast fire rate.
    Near,
}

/// Match phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    Active,
    Paused,
    /// Terminal. No further ticks execute until a restart.
    Over,
}

/// Why a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    EnemyFlagDestroyed,
    PlayerFlagDestroyed,
    PlayerDestroyed,
}

impl EndCause {
    /// The side that wins when the match ends this way.
    pub fn winner(self) -> Side {
        match self {
            EndCause::EnemyFlagDestroyed => Side::Player,
            EndCause::PlayerFlagDestroyed | EndCause::PlayerDestroyed => Side::Enemy,
        }
    }
}
