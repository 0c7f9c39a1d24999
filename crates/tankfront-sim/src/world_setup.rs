//! Entity spawn factories for setting up the match world.
//!
//! Creates the player tank and the enemy squad with
//! appropriate component bundles.

use glam::DVec2;
use hecs::World;

use tankfront_core::components::*;
use tankfront_core::constants::*;

/// Set up a fresh match: the player plus `enemy_count` enemies (capped at the
/// number of spawn lanes). Returns the player entity.
pub fn setup_match(world: &mut World, enemy_count: usize) -> hecs::Entity {
    let player = spawn_player(world, tile_position(PLAYER_START_TILE));
    for (slot, tile) in ENEMY_START_TILES.iter().take(enemy_count).enumerate() {
        spawn_enemy(world, slot as u32, tile_position(*tile));
    }
    player
}

/// Spawn the player's tank facing up the screen.
pub fn spawn_player(world: &mut World, position: DVec2) -> hecs::Entity {
    world.spawn((PlayerTank, Tank::new(position, PLAYER_START_FACING)))
}

/// Spawn an enemy tank. Only enemies carry `AiState`.
pub fn spawn_enemy(world: &mut World, slot: u32, position: DVec2) -> hecs::Entity {
    world.spawn((
        EnemyTank { slot },
        Tank::new(position, ENEMY_START_FACING),
        AiState::default(),
    ))
}

/// Convert a (col, row) tile coordinate, possibly fractional, to arena pixels.
fn tile_position((col, row): (f64, f64)) -> DVec2 {
    DVec2::new(col * TILE_SIZE, row * TILE_SIZE)
}
