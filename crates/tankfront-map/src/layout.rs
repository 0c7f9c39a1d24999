//! Static arena configuration derived once from a tile grid.

use glam::DVec2;

use tankfront_core::components::Wall;
use tankfront_core::constants::TILE_SIZE;
use tankfront_core::enums::Side;
use tankfront_core::types::Aabb;

use crate::error::MapError;
use crate::grid::{Tile, TileGrid};

/// Pixel position (top-left) of the tile at (row, col).
pub fn tile_origin(row: usize, col: usize) -> DVec2 {
    DVec2::new(col as f64 * TILE_SIZE, row as f64 * TILE_SIZE)
}

/// One wall per wall tile, in row-major order.
pub fn build_walls(grid: &TileGrid) -> Vec<Wall> {
    grid.cells()
        .filter(|(_, _, tile)| *tile == Tile::Wall)
        .map(|(row, col, _)| Wall {
            bounds: Aabb::square(tile_origin(row, col), TILE_SIZE),
        })
        .collect()
}

/// Pixel positions of the two flag tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlagTiles {
    pub player: DVec2,
    pub enemy: DVec2,
}

impl FlagTiles {
    pub fn get(&self, side: Side) -> DVec2 {
        match side {
            Side::Player => self.player,
            Side::Enemy => self.enemy,
        }
    }
}

/// Locate the flag tiles. Exactly one of each side is required.
pub fn flag_tiles(grid: &TileGrid) -> Result<FlagTiles, MapError> {
    let mut player = None;
    let mut enemy = None;

    for (row, col, tile) in grid.cells() {
        let (slot, side) = match tile {
            Tile::PlayerFlag => (&mut player, Side::Player),
            Tile::EnemyFlag => (&mut enemy, Side::Enemy),
            Tile::Empty | Tile::Wall => continue,
        };
        if slot.is_some() {
            return Err(MapError::DuplicateFlag(side));
        }
        *slot = Some(tile_origin(row, col));
    }

    Ok(FlagTiles {
        player: player.ok_or(MapError::MissingFlag(Side::Player))?,
        enemy: enemy.ok_or(MapError::MissingFlag(Side::Enemy))?,
    })
}

/// Everything the simulation needs from a grid: the immutable wall set and flag spawns.
#[derive(Debug, Clone)]
pub struct MapLayout {
    pub walls: Vec<Wall>,
    pub flags: FlagTiles,
}

impl MapLayout {
    pub fn from_grid(grid: &TileGrid) -> Result<MapLayout, MapError> {
        Ok(MapLayout {
            walls: build_walls(grid),
            flags: flag_tiles(grid)?,
        })
    }

    /// Layout of the built-in maze, which always has both flags.
    pub fn builtin() -> MapLayout {
        match MapLayout::from_grid(&TileGrid::builtin()) {
            Ok(layout) => layout,
            Err(err) => unreachable!("built-in map is invalid: {err}"),
        }
    }
}
