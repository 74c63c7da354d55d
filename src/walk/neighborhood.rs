//! Clockwise Moore neighborhood around a creation point.
//!
//! Neighbors are visited clockwise from the top-left corner and each slot
//! keeps its clock position even when the tile falls outside the grid:
//!
//! ```text
//!  0 1 2
//!  7 . 3
//!  6 5 4
//! ```
//!
//! The left and right neighbors of slot `i` are slots `(i + 7) % 8` and
//! `(i + 1) % 8`; a missing slot never contributes to its neighbors.

use crate::terrain::{Position, Tile, TileGrid};

/// Number of clock positions around a tile.
pub const CLOCK_SLOTS: usize = 8;

/// `(dx, dy)` offsets in clock order.
pub const CLOCK_OFFSETS: [(i32, i32); CLOCK_SLOTS] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// One in-bounds neighbor considered during a movement decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurroundingTile {
    /// Clock position (0-7).
    pub index: usize,
    /// Grid coordinate of the tile.
    pub pos: Position,
    /// Tile state at the time of the scan.
    pub content: Tile,
    /// Movement probability, filled in by the probability model.
    pub probability: f64,
}

impl SurroundingTile {
    fn new(index: usize, pos: Position, content: Tile) -> Self {
        Self {
            index,
            pos,
            content,
            probability: 0.0,
        }
    }
}

/// Fixed-capacity neighborhood, one optional slot per clock position.
#[derive(Debug, Clone)]
pub struct Neighborhood {
    slots: [Option<SurroundingTile>; CLOCK_SLOTS],
}

impl Neighborhood {
    /// Scans the tiles around `center`, omitting those outside `grid`.
    pub fn around(grid: &TileGrid, center: Position) -> Self {
        let mut slots = [None; CLOCK_SLOTS];

        for (index, &(dx, dy)) in CLOCK_OFFSETS.iter().enumerate() {
            let Some(pos) = center.offset(dx, dy) else {
                continue;
            };
            if let Some(content) = grid.get(pos) {
                slots[index] = Some(SurroundingTile::new(index, pos, content));
            }
        }

        Self { slots }
    }

    /// Number of in-bounds neighbors (8 interior, 5 edge, 3 corner).
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the tile at a clock position, if it is in bounds.
    pub fn slot(&self, index: usize) -> Option<&SurroundingTile> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Tile one step counter-clockwise from `index`.
    pub fn left_of(&self, index: usize) -> Option<&SurroundingTile> {
        self.slot((index + CLOCK_SLOTS - 1) % CLOCK_SLOTS)
    }

    /// Tile one step clockwise from `index`.
    pub fn right_of(&self, index: usize) -> Option<&SurroundingTile> {
        self.slot((index + 1) % CLOCK_SLOTS)
    }

    /// In-bounds tiles in clock order.
    pub fn iter(&self) -> impl Iterator<Item = &SurroundingTile> + '_ {
        self.slots.iter().flatten()
    }

    pub(crate) fn set_probability(&mut self, index: usize, probability: f64) {
        if let Some(tile) = self.slots.get_mut(index).and_then(Option::as_mut) {
            tile.probability = probability;
        }
    }
}
