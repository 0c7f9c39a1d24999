//! Enemy behavior policy.
//!
//! Pure functions that compute facing, movement and firing for one enemy
//! from its situation. No ECS dependency; operates on plain data. Wall
//! resolution and clamping of the returned step are the movement system's job.

use glam::DVec2;

use tankfront_core::constants::*;
use tankfront_core::enums::AiMode;
use tankfront_core::types::heading_vector;

/// Input to the policy for a single enemy.
pub struct EnemyContext {
    pub position: DVec2,
    pub player_position: DVec2,
    pub speed: f64,
    pub current_tick: u64,
    pub last_shot_tick: Option<u64>,
}

/// Output from the policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyDecision {
    pub mode: AiMode,
    /// Orientation facing the player exactly.
    pub facing: f64,
    /// Candidate displacement for this tick, before wall checks.
    pub step: DVec2,
    pub fire: bool,
}

/// Pick the behavior mode for a given distance. The threshold itself is far.
pub fn mode_for_distance(distance: f64) -> AiMode {
    if distance < ENEMY_NEAR_RANGE {
        AiMode::Near
    } else {
        AiMode::Far
    }
}

/// Ticks that must strictly elapse between shots in a mode.
pub fn fire_interval(mode: AiMode) -> u64 {
    match mode {
        AiMode::Near => NEAR_FIRE_INTERVAL_TICKS,
        AiMode::Far => FAR_FIRE_INTERVAL_TICKS,
    }
}

/// Whether the fire timer allows a shot this tick.
pub fn ready_to_fire(mode: AiMode, current_tick: u64, last_shot_tick: Option<u64>) -> bool {
    match last_shot_tick {
        None => true,
        Some(last) => current_tick.saturating_sub(last) > fire_interval(mode),
    }
}

/// Evaluate the policy for one enemy.
pub fn evaluate(ctx: &EnemyContext) -> EnemyDecision {
    let delta = ctx.player_position - ctx.position;
    let distance = delta.length();
    // atan2(0, 0) is 0, so an enemy sitting on the player faces +x.
    let facing = delta.y.atan2(delta.x);
    let mode = mode_for_distance(distance);

    let heading = match mode {
        // Perpendicular to the line of sight: circle the player.
        AiMode::Near => heading_vector(facing + std::f64::consts::FRAC_PI_2),
        AiMode::Far => heading_vector(facing),
    };

    EnemyDecision {
        mode,
        facing,
        step: heading * ctx.speed,
        fire: ready_to_fire(mode, ctx.current_tick, ctx.last_shot_tick),
    }
}
