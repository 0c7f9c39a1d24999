use std::fmt;

use tankfront_core::enums::Side;

/// Reasons a tile grid cannot be used as an arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// No rows at all.
    Empty,
    UnknownSymbol {
        row: usize,
        col: usize,
        symbol: char,
    },
    /// A row whose tile count differs from the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    MissingFlag(Side),
    DuplicateFlag(Side),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Empty => write!(f, "tile grid has no rows"),
            MapError::UnknownSymbol { row, col, symbol } => {
                write!(f, "unknown tile symbol {symbol:?} at row {row}, column {col}")
            }
            MapError::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} tiles, expected {expected}"),
            MapError::MissingFlag(side) => write!(f, "tile grid has no {side:?} flag"),
            MapError::DuplicateFlag(side) => {
                write!(f, "tile grid has more than one {side:?} flag")
            }
        }
    }
}

impl std::error::Error for MapError {}
