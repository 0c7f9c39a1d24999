//! ECS systems that operate on the match world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only)
//! plus the engine-owned arena, objectives and score they need.
//! They do not own state.

pub mod enemy_ai;
pub mod movement;
pub mod player;
pub mod projectiles;
pub mod snapshot;
