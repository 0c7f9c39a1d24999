//! Projectile subsystem: spawning, advancing, and resolving hits.
//!
//! Each tank owns its projectiles. A shooter's list is advanced newest-first
//! by index so removals never skip a live projectile, and every projectile
//! resolves at most one collision per tick. Checks run wall, flag, tank,
//! then bounds; the first match destroys the projectile.

use hecs::{Entity, World};
use tracing::{debug, info};

use tankfront_core::components::{EnemyTank, PlayerTank, Projectile, Tank};
use tankfront_core::constants::*;
use tankfront_core::enums::Side;
use tankfront_core::events::MatchEvent;
use tankfront_core::types::{heading_vector, Aabb};

use crate::arena::Arena;
use crate::objectives::{Objectives, ScoreState};

/// What ended a projectile's flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    Wall,
    Flag(Side),
    Tank(Side),
    OutOfBounds,
}

/// Build a projectile at the cannon tip of `shooter`.
pub fn spawn(shooter: &Tank, owner: Side) -> Projectile {
    let cannon = heading_vector(shooter.orientation) * (shooter.size * CANNON_LENGTH_FACTOR);
    Projectile {
        position: shooter.center() + cannon,
        size: PROJECTILE_SIZE,
        orientation: shooter.orientation,
        speed: PROJECTILE_SPEED,
        owner,
    }
}

/// Fire: append a new projectile to the shooter's own list.
pub fn fire(shooter: &mut Tank, owner: Side) {
    let projectile = spawn(shooter, owner);
    shooter.projectiles.push(projectile);
}

/// Advance every projectile owned by `shooter` by one tick and resolve hits.
pub fn advance(
    world: &mut World,
    shooter: Entity,
    arena: &Arena,
    objectives: &mut Objectives,
    score: &mut ScoreState,
    events: &mut Vec<MatchEvent>,
) {
    // Detach the list so other tanks can be mutated while walking it.
    let mut projectiles = match world.get::<&mut Tank>(shooter) {
        Ok(mut tank) => std::mem::take(&mut tank.projectiles),
        Err(_) => return,
    };

    for i in (0..projectiles.len()).rev() {
        let projectile = &mut projectiles[i];
        projectile.position += heading_vector(projectile.orientation) * projectile.speed;

        let projectile = *projectile;
        if let Some(impact) = resolve(world, &projectile, arena, objectives, score, events) {
            debug!(owner = ?projectile.owner, ?impact, "projectile destroyed");
            projectiles.remove(i);
        }
    }

    if let Ok(mut tank) = world.get::<&mut Tank>(shooter) {
        tank.projectiles = projectiles;
    }
}

/// Run the ordered collision checks for one projectile after it has moved.
pub fn resolve(
    world: &mut World,
    projectile: &Projectile,
    arena: &Arena,
    objectives: &mut Objectives,
    score: &mut ScoreState,
    events: &mut Vec<MatchEvent>,
) -> Option<Impact> {
    let bounds = projectile.bounds();

    if arena.collides_with_walls(&bounds) {
        events.push(MatchEvent::WallHit {
            owner: projectile.owner,
            position: projectile.position,
        });
        return Some(Impact::Wall);
    }

    for side in [Side::Player, Side::Enemy] {
        let flag = objectives.flag_mut(side);
        if flag.bounds().intersects(&bounds) {
            flag.health = flag.health.saturating_sub(FLAG_HIT_DAMAGE);
            debug!(flag = ?side, health = flag.health, "flag hit");
            events.push(MatchEvent::FlagHit {
                flag: side,
                health: flag.health,
            });
            return Some(Impact::Flag(side));
        }
    }

    let tank_hit = match projectile.owner {
        Side::Enemy => hit_player(world, &bounds, objectives, events),
        Side::Player => hit_enemy(world, &bounds, score, events),
    };
    if let Some(side) = tank_hit {
        return Some(Impact::Tank(side));
    }

    if arena.is_out_of_bounds(projectile.position) {
        return Some(Impact::OutOfBounds);
    }

    None
}

fn hit_player(
    world: &mut World,
    bounds: &Aabb,
    objectives: &mut Objectives,
    events: &mut Vec<MatchEvent>,
) -> Option<Side> {
    let (_, (_, tank)) = world
        .query_mut::<(&PlayerTank, &mut Tank)>()
        .into_iter()
        .find(|(_, (_, tank))| tank.bounds().intersects(bounds))?;

    let was_alive = !tank.is_destroyed();
    tank.health = tank.health.saturating_sub(PLAYER_HIT_DAMAGE);

    if was_alive && tank.is_destroyed() {
        objectives.player_destroyed = true;
        info!("player destroyed");
        events.push(MatchEvent::PlayerDestroyed);
    } else {
        events.push(MatchEvent::TankHit {
            side: Side::Player,
            slot: None,
            health: tank.health,
        });
    }
    Some(Side::Player)
}

fn hit_enemy(
    world: &mut World,
    bounds: &Aabb,
    score: &mut ScoreState,
    events: &mut Vec<MatchEvent>,
) -> Option<Side> {
    // Most recently spawned enemy first; first overlap wins.
    let mut candidates: Vec<(u32, Entity)> = world
        .query::<(&EnemyTank, &Tank)>()
        .iter()
        .filter(|(_, (_, tank))| tank.bounds().intersects(bounds))
        .map(|(entity, (enemy, _))| (enemy.slot, entity))
        .collect();
    candidates.sort_by(|a, b| b.0.cmp(&a.0));
    let (slot, entity) = candidates.first().copied()?;

    let destroyed = {
        let mut tank = world.get::<&mut Tank>(entity).ok()?;
        tank.health = tank.health.saturating_sub(ENEMY_HIT_DAMAGE);
        if !tank.is_destroyed() {
            events.push(MatchEvent::TankHit {
                side: Side::Enemy,
                slot: Some(slot),
                health: tank.health,
            });
        }
        tank.is_destroyed()
    };

    if destroyed {
        // Removal is immediate; the enemy's projectiles go with it.
        let _ = world.despawn(entity);
        score.score += KILL_REWARD;
        score.enemies_destroyed += 1;
        info!(slot, score = score.score, "enemy destroyed");
        events.push(MatchEvent::EnemyDestroyed {
            slot,
            score: score.score,
        });
    }
    Some(Side::Enemy)
}
