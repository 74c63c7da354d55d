//! Terrain grid module.
//!
//! Provides the tile states, grid coordinates and the owned tile buffer
//! the generator mutates.

mod grid;
mod tile;

pub use grid::TileGrid;
pub use tile::{Position, Tile};
