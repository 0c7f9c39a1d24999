//! Render sinks: where the game loop hands each snapshot.
//!
//! This host has no window; the default sink reports through tracing.

use tracing::{debug, info};

use tankfront_core::events::{MatchEvent, MatchOutcome};
use tankfront_core::state::MatchSnapshot;

/// Consumer of per-tick snapshots.
pub trait RenderSink {
    fn present(&mut self, snapshot: &MatchSnapshot);

    /// Called once, on the tick the match ends.
    fn game_over(&mut self, outcome: &MatchOutcome);
}

/// Game-over banner with the final score.
pub fn game_over_line(outcome: &MatchOutcome) -> String {
    format!("{} Final score: {}", outcome.headline(), outcome.score)
}

/// Logs notable events and a periodic match summary.
pub struct LogSink {
    interval: u64,
}

impl LogSink {
    /// `interval` is in ticks; 0 disables the summary.
    pub fn new(interval: u64) -> Self {
        Self { interval }
    }
}

impl RenderSink for LogSink {
    fn present(&mut self, snapshot: &MatchSnapshot) {
        for event in &snapshot.events {
            match event {
                MatchEvent::EnemyDestroyed { slot, score } => {
                    info!(tick = snapshot.time.tick, slot, score, "enemy down")
                }
                MatchEvent::PlayerDestroyed => info!(tick = snapshot.time.tick, "player down"),
                // Reported by game_over.
                MatchEvent::MatchOver(_) => {}
                other => debug!(tick = snapshot.time.tick, event = ?other),
            }
        }

        if self.interval > 0 && snapshot.time.tick % self.interval == 0 {
            let player_health = snapshot.player.as_ref().map_or(0, |p| p.health);
            let flag_health: Vec<u32> = snapshot.flags.iter().map(|f| f.health).collect();
            info!(
                tick = snapshot.time.tick,
                phase = ?snapshot.phase,
                score = snapshot.score.score,
                enemies = snapshot.score.enemies_remaining,
                projectiles = snapshot.projectiles.len(),
                player_health,
                ?flag_health,
                "match status"
            );
        }
    }

    fn game_over(&mut self, outcome: &MatchOutcome) {
        info!(
            winner = ?outcome.winner,
            cause = ?outcome.cause,
            score = outcome.score,
            tick = outcome.tick,
            "game over"
        );
        println!("{}", game_over_line(outcome));
    }
}
