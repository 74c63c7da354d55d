//! Owned tile buffer for a 2D terrain grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Position, Tile};

/// A `width × height` grid of tiles stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Creates a grid with every tile set to [`Tile::Empty`].
    ///
    /// Callers validate the dimensions; a zero-sized grid is representable
    /// but never produced by the generator.
    ///
    /// # Panics
    /// Panics if `width * height` tiles cannot be allocated.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Empty; width.saturating_mul(height)],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the total number of tiles.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    fn idx(&self, pos: Position) -> usize {
        pos.y * self.width + pos.x
    }

    /// Returns true if `pos` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Returns the tile at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<Tile> {
        self.in_bounds(pos).then(|| self.tiles[self.idx(pos)])
    }

    /// Sets the tile at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds.
    pub fn set(&mut self, pos: Position, tile: Tile) {
        debug_assert!(self.in_bounds(pos));
        let i = self.idx(pos);
        self.tiles[i] = tile;
    }

    /// Resets every tile to [`Tile::Empty`], keeping the dimensions.
    pub fn clear(&mut self) {
        self.tiles.fill(Tile::Empty);
    }

    /// Counts tiles in the given state.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Counts every non-empty tile.
    pub fn claimed_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_claimed()).count()
    }

    /// Iterates rows from top (`y = 0`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        // chunks_exact panics on zero, a zero-width grid has no rows anyway
        self.tiles.chunks_exact(self.width.max(1)).take(self.height)
    }
}

/// Renders one text line per row, each tile preceded by a single space.
impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for tile in row {
                write!(f, " {}", tile.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = TileGrid::new(7, 3);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.tile_count(), 21);
        assert_eq!(grid.count(Tile::Empty), 21);
    }

    #[test]
    fn test_get_set_tile() {
        let mut grid = TileGrid::new(4, 5);
        grid.set(Position::new(3, 4), Tile::Origin);
        assert_eq!(grid.get(Position::new(3, 4)), Some(Tile::Origin));
        assert_eq!(grid.rows().nth(4).map(|row| row[3]), Some(Tile::Origin));
        assert_eq!(grid.get(Position::new(4, 0)), None);
        assert_eq!(grid.get(Position::new(0, 5)), None);
    }

    #[test]
    fn test_clear_keeps_dimensions() {
        let mut grid = TileGrid::new(3, 2);
        grid.set(Position::new(0, 0), Tile::Origin);
        grid.set(Position::new(2, 1), Tile::Active);
        assert_eq!(grid.claimed_count(), 2);

        grid.clear();
        assert_eq!(grid.claimed_count(), 0);
        assert_eq!((grid.width(), grid.height()), (3, 2));
    }

    #[test]
    fn test_display_row_major() {
        let mut grid = TileGrid::new(3, 2);
        grid.set(Position::new(1, 0), Tile::Origin);
        grid.set(Position::new(2, 1), Tile::Active);

        assert_eq!(grid.to_string(), " _ X _\n _ _ O\n");
    }
}
