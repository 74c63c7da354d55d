//! Configuration for seed point terrain generation.

use serde::{Deserialize, Serialize};

use super::WalkError;

/// Configuration parameters for a random-walk terrain run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Horizontal grid size in tiles.
    pub width: usize,
    /// Vertical grid size in tiles.
    pub height: usize,
    /// Number of creation points wandering the grid.
    pub creation_points: usize,
    /// Movement steps performed by each call to `generate`.
    pub iterations_per_run: usize,
    /// Random seed for reproducible generation.
    pub seed: u64,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            creation_points: 2,
            iterations_per_run: 30,
            seed: 42,
        }
    }
}

impl WalkConfig {
    /// Creates the default configuration with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Small single-point configuration that advances one step per run.
    ///
    /// Suited to watching the walk tile by tile in a terminal.
    pub fn console(seed: u64) -> Self {
        Self {
            width: 15,
            height: 20,
            creation_points: 1,
            iterations_per_run: 1,
            seed,
        }
    }

    /// Checks dimensions and counts.
    pub fn validate(&self) -> Result<(), WalkError> {
        validate_dimensions(self.width, self.height)?;
        validate_count("creation points", self.creation_points)?;
        validate_count("iterations", self.iterations_per_run)
    }
}

/// Largest supported grid, in tiles.
pub const MAX_TILES: usize = i32::MAX as usize;

pub(crate) fn validate_dimensions(width: usize, height: usize) -> Result<(), WalkError> {
    let fits = width
        .checked_mul(height)
        .is_some_and(|tiles| tiles <= MAX_TILES);
    if width == 0 || height == 0 || !fits {
        return Err(WalkError::InvalidDimension { width, height });
    }
    Ok(())
}

pub(crate) fn validate_count(what: &'static str, value: usize) -> Result<(), WalkError> {
    if value == 0 {
        return Err(WalkError::InvalidCount { what, value });
    }
    Ok(())
}
