//! Snapshot system: queries the ECS world and builds a complete MatchSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use tankfront_core::components::*;
use tankfront_core::enums::{MatchPhase, Side};
use tankfront_core::events::{MatchEvent, MatchOutcome};
use tankfront_core::state::*;
use tankfront_core::types::SimTime;

use crate::arena::Arena;
use crate::objectives::{Objectives, ScoreState};

/// Build a complete MatchSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    arena: &Arena,
    objectives: &Objectives,
    score: &ScoreState,
    time: &SimTime,
    phase: MatchPhase,
    events: Vec<MatchEvent>,
    outcome: Option<MatchOutcome>,
) -> MatchSnapshot {
    let enemies = build_enemies(world);

    MatchSnapshot {
        time: *time,
        phase,
        score: ScoreView {
            score: score.score,
            enemies_destroyed: score.enemies_destroyed,
            enemies_remaining: enemies.len() as u32,
            shots_fired: score.shots_fired,
        },
        player: build_player(world),
        enemies,
        projectiles: build_projectiles(world),
        walls: arena.walls().iter().map(|wall| wall.bounds).collect(),
        flags: build_flags(objectives),
        events,
        outcome,
    }
}

fn tank_view(tank: &Tank, side: Side, slot: Option<u32>, ai: Option<&AiState>) -> TankView {
    TankView {
        side,
        slot,
        position: tank.position,
        size: tank.size,
        orientation: tank.orientation,
        health: tank.health,
        mode: ai.map(|ai| ai.mode),
    }
}

fn build_player(world: &World) -> Option<TankView> {
    world
        .query::<(&PlayerTank, &Tank)>()
        .iter()
        .next()
        .map(|(_, (_, tank))| tank_view(tank, Side::Player, None, None))
}

/// Enemy views sorted by slot.
fn build_enemies(world: &World) -> Vec<TankView> {
    let mut enemies: Vec<TankView> = world
        .query::<(&EnemyTank, &Tank, &AiState)>()
        .iter()
        .map(|(_, (enemy, tank, ai))| tank_view(tank, Side::Enemy, Some(enemy.slot), Some(ai)))
        .collect();

    enemies.sort_by_key(|view| view.slot);
    enemies
}

/// Player projectiles first, then each enemy's in slot order.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut owned: Vec<(Option<u32>, ProjectileView)> = Vec::new();

    for (_, (tank, enemy)) in world.query::<(&Tank, Option<&EnemyTank>)>().iter() {
        let slot = enemy.map(|enemy| enemy.slot);
        owned.extend(tank.projectiles.iter().map(|projectile| {
            (
                slot,
                ProjectileView {
                    owner: projectile.owner,
                    position: projectile.position,
                    size: projectile.size,
                },
            )
        }));
    }

    // Stable sort keeps each tank's own firing order.
    owned.sort_by_key(|(slot, _)| *slot);
    owned.into_iter().map(|(_, view)| view).collect()
}

fn build_flags(objectives: &Objectives) -> Vec<FlagView> {
    objectives
        .flags()
        .iter()
        .map(|flag| FlagView {
            side: flag.side,
            position: flag.position,
            size: flag.size,
            health: flag.health,
        })
        .collect()
}
