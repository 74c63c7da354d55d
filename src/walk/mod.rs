//! Random-walk seed point generation.
//!
//! A handful of creation points wander a bounded grid. Each step scores the
//! up to eight surrounding tiles, moves the point to the best one and leaves
//! a claimed `Origin` tile behind:
//! - [`neighborhood`] builds the clockwise Moore neighborhood
//! - [`probability`] scores neighbors and picks the destination
//! - [`TerrainGenerator`] owns the grid, the points and the random stream

mod config;
mod draws;
mod generator;
pub mod neighborhood;
pub mod probability;

use thiserror::Error;

pub use config::{WalkConfig, MAX_TILES};
pub use draws::DrawSource;
pub use generator::TerrainGenerator;
pub use neighborhood::{Neighborhood, SurroundingTile};
pub use probability::{score_neighborhood, select_destination};

/// Errors reported by the generator at its API boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalkError {
    #[error(
        "Invalid grid dimensions: {width}x{height} (both must be > 0, at most {max} tiles)",
        max = MAX_TILES
    )]
    InvalidDimension { width: usize, height: usize },
    #[error("Invalid count for {what}: {value} (must be > 0)")]
    InvalidCount { what: &'static str, value: usize },
    #[error("No creation points - place creation points before generating")]
    NotInitialized,
    #[error("Creation point ({x}, {y}) outside {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}
