//! Flag/objective tracking, match score, and the terminal condition.

use glam::DVec2;

use tankfront_core::components::Flag;
use tankfront_core::enums::{EndCause, Side};

/// The two base flags plus the player-death latch.
#[derive(Debug, Clone)]
pub struct Objectives {
    pub player_flag: Flag,
    pub enemy_flag: Flag,
    /// Set when an enemy projectile brings the player to zero health.
    pub player_destroyed: bool,
}

impl Objectives {
    pub fn new(player_flag_position: DVec2, enemy_flag_position: DVec2) -> Self {
        Self {
            player_flag: Flag::new(Side::Player, player_flag_position),
            enemy_flag: Flag::new(Side::Enemy, enemy_flag_position),
            player_destroyed: false,
        }
    }

    pub fn flag(&self, side: Side) -> &Flag {
        match side {
            Side::Player => &self.player_flag,
            Side::Enemy => &self.enemy_flag,
        }
    }

    pub fn flag_mut(&mut self, side: Side) -> &mut Flag {
        match side {
            Side::Player => &mut self.player_flag,
            Side::Enemy => &mut self.enemy_flag,
        }
    }

    /// Flags in hit-test order.
    pub fn flags(&self) -> [&Flag; 2] {
        [&self.player_flag, &self.enemy_flag]
    }

    /// Terminal condition, if reached. A destroyed enemy flag takes precedence,
    /// then a destroyed player flag, then the player's death.
    pub fn evaluate(&self) -> Option<EndCause> {
        if self.enemy_flag.is_destroyed() {
            Some(EndCause::EnemyFlagDestroyed)
        } else if self.player_flag.is_destroyed() {
            Some(EndCause::PlayerFlagDestroyed)
        } else if self.player_destroyed {
            Some(EndCause::PlayerDestroyed)
        } else {
            None
        }
    }
}

/// Running match score.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    /// Monotonic; only ever incremented.
    pub score: u32,
    pub enemies_destroyed: u32,
    pub shots_fired: u32,
}
