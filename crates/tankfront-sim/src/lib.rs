//! Simulation engine for tankfront.
//!
//! Owns the hecs ECS world of tanks, runs systems at a fixed tick rate,
//! and produces MatchSnapshots for the renderer.

pub mod arena;
pub mod engine;
pub mod objectives;
pub mod systems;
pub mod world_setup;

pub use engine::{MatchConfig, MatchEngine};
pub use tankfront_core as core;

#[cfg(test)]
mod tests;
