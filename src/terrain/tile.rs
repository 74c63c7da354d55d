//! Tile states and grid coordinates.

use serde::{Deserialize, Serialize};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tile {
    /// Unclaimed cell (`_`).
    #[default]
    Empty = 0,
    /// Claimed cell, a stable anchor for the landmass (`X`).
    Origin = 1,
    /// Current position of a creation point (`O`).
    Active = 2,
}

impl Tile {
    /// Returns all three tile states in order.
    pub const fn all() -> [Tile; 3] {
        [Tile::Empty, Tile::Origin, Tile::Active]
    }

    /// Returns the display symbol for this tile.
    pub const fn symbol(self) -> char {
        match self {
            Tile::Empty => '_',
            Tile::Origin => 'X',
            Tile::Active => 'O',
        }
    }

    /// Parses a display symbol back into a tile.
    pub const fn from_symbol(symbol: char) -> Option<Tile> {
        match symbol {
            '_' => Some(Tile::Empty),
            'X' => Some(Tile::Origin),
            'O' => Some(Tile::Active),
            _ => None,
        }
    }

    /// Returns true for any non-empty tile.
    pub const fn is_claimed(self) -> bool {
        !matches!(self, Tile::Empty)
    }
}

/// Integer grid coordinate. `x` is the horizontal index, `y` the vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Applies a signed offset, returning `None` if either axis would go negative.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Position> {
        let x = self.x.checked_add_signed(dx as isize)?;
        let y = self.y.checked_add_signed(dy as isize)?;
        Some(Position { x, y })
    }
}
