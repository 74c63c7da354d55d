//! Random-walk seed point terrain generator.
//!
//! A small number of creation points wander a bounded 2D grid, preferring
//! tiles that border already claimed land, and mark every tile they leave
//! as terrain. The result is clustered, coastline-like landmasses rather
//! than uniform noise.

pub mod terrain;
pub mod walk;

pub use terrain::{Position, Tile, TileGrid};
pub use walk::{DrawSource, TerrainGenerator, WalkConfig, WalkError};
