//! Enemy AI for tankfront.
//!
//! Implements the reactive near/far policy that drives every enemy tank:
//! face the player, close in or strafe, and fire on a mode-dependent timer.

pub mod policy;

pub use tankfront_core as core;
