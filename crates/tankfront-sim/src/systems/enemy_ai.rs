//! Enemy AI system: decides, moves and fires for every live enemy each tick.
//!
//! Calls the policy from tankfront-ai for the decision, then applies it
//! through the same wall resolution as the player. Each enemy's projectiles
//! are advanced right after that enemy acts.

use hecs::{Entity, World};
use tracing::trace;

use tankfront_core::components::{AiState, EnemyTank, PlayerTank, Tank};
use tankfront_core::enums::Side;
use tankfront_core::events::MatchEvent;

use tankfront_ai::policy::{evaluate, EnemyContext};

use crate::arena::Arena;
use crate::objectives::{Objectives, ScoreState};
use crate::systems::movement::{self, BoundaryClamp};
use crate::systems::projectiles;

/// Run the enemy AI for all enemies in slot order.
pub fn run(
    world: &mut World,
    arena: &Arena,
    objectives: &mut Objectives,
    score: &mut ScoreState,
    current_tick: u64,
    events: &mut Vec<MatchEvent>,
) {
    let Some(player_position) = world
        .query::<(&PlayerTank, &Tank)>()
        .iter()
        .next()
        .map(|(_, (_, tank))| tank.position)
    else {
        return;
    };

    for (slot, entity) in enemies_in_slot_order(world) {
        if let Ok((tank, ai)) = world.query_one_mut::<(&mut Tank, &mut AiState)>(entity) {
            let decision = evaluate(&EnemyContext {
                position: tank.position,
                player_position,
                speed: tank.speed,
                current_tick,
                last_shot_tick: ai.last_shot_tick,
            });

            tank.orientation = decision.facing;
            ai.mode = decision.mode;
            movement::resolve_step(tank, decision.step, arena);
            BoundaryClamp::ArenaEdges.apply(tank, arena);

            if decision.fire {
                projectiles::fire(tank, Side::Enemy);
                ai.last_shot_tick = Some(current_tick);
                events.push(MatchEvent::ShotFired {
                    side: Side::Enemy,
                    slot: Some(slot),
                });
            }
            trace!(slot, mode = ?decision.mode, x = tank.position.x, y = tank.position.y, "enemy step");
        }

        projectiles::advance(world, entity, arena, objectives, score, events);
    }
}

/// Live enemies sorted by spawn slot.
pub fn enemies_in_slot_order(world: &World) -> Vec<(u32, Entity)> {
    let mut enemies: Vec<(u32, Entity)> = world
        .query::<&EnemyTank>()
        .iter()
        .map(|(entity, enemy)| (enemy.slot, entity))
        .collect();
    enemies.sort_by_key(|(slot, _)| *slot);
    enemies
}
