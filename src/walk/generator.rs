//! Terrain generator: grid lifecycle and the movement loop.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use super::config::{validate_count, validate_dimensions};
use super::draws::DrawSource;
use super::neighborhood::Neighborhood;
use super::probability::{score_neighborhood, select_destination};
use super::{WalkConfig, WalkError};
use crate::terrain::{Position, Tile, TileGrid};

/// Owns the tile grid, the creation points and the random stream.
///
/// All mutation goes through `&mut self`; callers only ever see copies of
/// the grid via [`TerrainGenerator::snapshot`].
#[derive(Debug, Clone)]
pub struct TerrainGenerator<D = ChaCha8Rng> {
    grid: TileGrid,
    points: Vec<Position>,
    iterations_per_run: usize,
    draws: D,
}

impl TerrainGenerator<ChaCha8Rng> {
    /// Builds a generator from a configuration and seeds its creation points.
    ///
    /// The random stream is `ChaCha8Rng` seeded with `config.seed`, so equal
    /// configurations produce equal terrain.
    pub fn from_config(config: &WalkConfig) -> Result<Self, WalkError> {
        config.validate()?;

        let draws = ChaCha8Rng::seed_from_u64(config.seed);
        let mut generator = Self::with_draws(config.width, config.height, draws)?;
        generator.iterations_per_run = config.iterations_per_run;
        generator.place_creation_points(config.creation_points)?;
        Ok(generator)
    }
}

impl<D: DrawSource> TerrainGenerator<D> {
    /// Creates an empty grid with no creation points, drawing from `draws`.
    pub fn with_draws(width: usize, height: usize, draws: D) -> Result<Self, WalkError> {
        validate_dimensions(width, height)?;
        Ok(Self {
            grid: TileGrid::new(width, height),
            points: Vec::new(),
            iterations_per_run: WalkConfig::default().iterations_per_run,
            draws,
        })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn iterations_per_run(&self) -> usize {
        self.iterations_per_run
    }

    /// Returns a copy of the current creation point positions.
    pub fn creation_points(&self) -> Vec<Position> {
        self.points.clone()
    }

    /// Resets the generator: new grid size, fresh creation points, new run length.
    ///
    /// Everything is validated up front; on error the generator is unchanged.
    pub fn configure(
        &mut self,
        width: usize,
        height: usize,
        creation_points: usize,
        iterations_per_run: usize,
    ) -> Result<(), WalkError> {
        validate_dimensions(width, height)?;
        validate_count("creation points", creation_points)?;
        validate_count("iterations", iterations_per_run)?;

        self.iterations_per_run = iterations_per_run;
        self.initialize(width, height)?;
        self.place_creation_points(creation_points)
    }

    /// Allocates an all-empty `width × height` grid and drops every creation point.
    pub fn initialize(&mut self, width: usize, height: usize) -> Result<(), WalkError> {
        validate_dimensions(width, height)?;
        self.grid = TileGrid::new(width, height);
        self.points.clear();
        info!(width, height, "initialized terrain grid");
        Ok(())
    }

    /// Scatters `count` creation points uniformly over the grid.
    ///
    /// Each landing cell that is still empty becomes `Origin`. Points may land
    /// on already claimed cells or on each other; such cells are left as is.
    /// Cells held by the points being replaced become `Origin`.
    pub fn place_creation_points(&mut self, count: usize) -> Result<(), WalkError> {
        validate_count("creation points", count)?;
        self.retire_points();

        let (width, height) = (self.grid.width(), self.grid.height());
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            let x = self.draws.draw_index(width);
            let y = self.draws.draw_index(height);
            let pos = Position::new(x, y);
            self.claim_if_empty(pos);
            points.push(pos);
        }
        self.points = points;

        info!(count, "placed creation points");
        Ok(())
    }

    /// Places creation points at explicit positions.
    ///
    /// Marks empty cells `Origin` and retires the previous points exactly like
    /// random placement. Nothing is changed if any position lies outside the grid.
    pub fn set_creation_points(&mut self, positions: &[Position]) -> Result<(), WalkError> {
        validate_count("creation points", positions.len())?;
        if let Some(bad) = positions.iter().find(|p| !self.grid.in_bounds(**p)) {
            return Err(WalkError::OutOfBounds {
                x: bad.x,
                y: bad.y,
                width: self.grid.width(),
                height: self.grid.height(),
            });
        }

        self.retire_points();
        for &pos in positions {
            self.claim_if_empty(pos);
        }
        self.points = positions.to_vec();
        Ok(())
    }

    /// Clears the grid but keeps the creation points where they are.
    ///
    /// The next run resumes walking from the stored positions on the blank grid.
    pub fn reinitialize(&mut self) {
        self.grid.clear();
        debug!(points = self.points.len(), "cleared terrain grid");
    }

    /// Returns a copy of the grid.
    pub fn snapshot(&self) -> TileGrid {
        self.grid.clone()
    }

    /// Runs the configured number of movement iterations.
    pub fn generate(&mut self) -> Result<(), WalkError> {
        self.run_iterations(self.iterations_per_run)
    }

    /// Moves every creation point `iterations` times, points in index order.
    pub fn run_iterations(&mut self, iterations: usize) -> Result<(), WalkError> {
        if self.points.is_empty() {
            return Err(WalkError::NotInitialized);
        }
        validate_count("iterations", iterations)?;

        for _ in 0..iterations {
            for index in 0..self.points.len() {
                self.step(index);
            }
        }

        debug!(
            iterations,
            claimed = self.grid.claimed_count(),
            total = self.grid.tile_count(),
            "generation run complete"
        );
        Ok(())
    }

    fn step(&mut self, index: usize) {
        let from = self.points[index];

        let mut hood = Neighborhood::around(&self.grid, from);
        score_neighborhood(&mut hood, &mut self.draws);
        // A 1x1 grid has nowhere to go; the point stays put.
        let to = select_destination(&hood).map_or(from, |tile| tile.pos);

        self.grid.set(from, Tile::Origin);
        self.grid.set(to, Tile::Active);
        self.points[index] = to;

        trace!(point = index, from = ?from, to = ?to, "creation point moved");
    }

    /// Turns the `Active` cells of the current points into `Origin`.
    fn retire_points(&mut self) {
        for &pos in &self.points {
            if self.grid.get(pos) == Some(Tile::Active) {
                self.grid.set(pos, Tile::Origin);
            }
        }
    }

    fn claim_if_empty(&mut self, pos: Position) {
        if self.grid.get(pos) == Some(Tile::Empty) {
            self.grid.set(pos, Tile::Origin);
        }
    }
}
