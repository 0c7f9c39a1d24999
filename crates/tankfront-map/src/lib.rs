//! Arena map for tankfront.
//!
//! Tile grid parsing, the built-in maze, and derivation of the
//! static wall set and flag positions.

pub use tankfront_core as core;

pub mod error;
pub mod grid;
pub mod layout;

// Re-export key types for convenience.
pub use error::MapError;
pub use grid::{Tile, TileGrid};
pub use layout::{build_walls, flag_tiles, FlagTiles, MapLayout};
