//! TileGrid: the rectangular tile layout an arena is built from.

use crate::error::MapError;

/// One cell of the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Wall,
    PlayerFlag,
    EnemyFlag,
}

impl Tile {
    /// Map a grid digit to a tile. `0` empty, `1` wall, `2` player flag, `3` enemy flag.
    pub fn from_symbol(symbol: char) -> Option<Tile> {
        match symbol {
            '0' => Some(Tile::Empty),
            '1' => Some(Tile::Wall),
            '2' => Some(Tile::PlayerFlag),
            '3' => Some(Tile::EnemyFlag),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Tile::Empty => '0',
            Tile::Wall => '1',
            Tile::PlayerFlag => '2',
            Tile::EnemyFlag => '3',
        }
    }
}

/// The built-in maze. Corridors are wide enough for a tank to rotate in place.
const BUILTIN_MAP: &str = "
1111111111111111111111111111111
1000000000000000000000000000001
1000000000000000000000000000001
1001110000001111110000011110001
1001310000000000000000010010001
1001010000111000111100010010001
1000000000111000001100000000001
1001010000111000111100010010001
1000000000111000001100000000001
1001010000111000111100010010001
1001010000111000111100010010001
1001010000000000000000012010001
1001110000001111110000011110001
1000000000000000000000000000001
1000000000000000000000000000001
1000000000000000000000000000001
1000000000000000000000000000001
1111111111111111111111111111111
";

/// Row-major tile grid. Row 0 is the top of the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Parse a grid from text: one row per non-blank line, one digit per tile.
    /// Commas, whitespace and square brackets are separators and are skipped,
    /// so an array-literal layout can be pasted in as-is.
    pub fn parse(text: &str) -> Result<TileGrid, MapError> {
        let mut width = 0;
        let mut height = 0;
        let mut tiles = Vec::new();

        for line in text.lines() {
            let mut found = 0;
            for (col, symbol) in line
                .chars()
                .filter(|c| !matches!(c, ',' | '[' | ']') && !c.is_whitespace())
                .enumerate()
            {
                let tile = Tile::from_symbol(symbol).ok_or(MapError::UnknownSymbol {
                    row: height,
                    col,
                    symbol,
                })?;
                tiles.push(tile);
                found += 1;
            }

            if found == 0 {
                continue;
            }
            if height == 0 {
                width = found;
            } else if found != width {
                return Err(MapError::RaggedRow {
                    row: height,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }

        if height == 0 {
            return Err(MapError::Empty);
        }

        Ok(TileGrid {
            width,
            height,
            tiles,
        })
    }

    /// The built-in arena layout.
    pub fn builtin() -> TileGrid {
        match TileGrid::parse(BUILTIN_MAP) {
            Ok(grid) => grid,
            Err(err) => unreachable!("built-in map is malformed: {err}"),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at (row, col), or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.tiles[row * self.width + col])
    }

    /// Every tile with its (row, col), row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (i / width, i % width, *tile))
    }
}
