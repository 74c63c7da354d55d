//! Movement probability model.
//!
//! Every in-bounds neighbor gets a score built from integer draws scaled by
//! 0.01:
//!
//! - base: `[1, 18]` for tiles that are not `Origin`, `-[40, 59]` for `Origin`
//! - `+[20, 39]` if the left clock neighbor is `Origin`
//! - `+[20, 39]` if the right clock neighbor is `Origin`
//!
//! Claimed tiles repel the walker while tiles bordering claimed ones attract
//! it, which grows connected landmasses instead of scattered noise.

use super::draws::DrawSource;
use super::neighborhood::{Neighborhood, SurroundingTile, CLOCK_SLOTS};
use crate::terrain::Tile;

/// Draw range (inclusive low, exclusive high) for the base term of open tiles.
pub const OPEN_BASE_RANGE: (i32, i32) = (1, 19);
/// Draw range for the repulsive base term of `Origin` tiles.
pub const ORIGIN_BASE_RANGE: (i32, i32) = (40, 60);
/// Draw range for each adjacency bonus.
pub const ADJACENCY_BONUS_RANGE: (i32, i32) = (20, 40);

const SCALE: f64 = 0.01;

/// Scores every tile of `hood` in clock order.
///
/// Draw order per tile is base, left bonus, right bonus; bonuses are only
/// drawn when they apply.
pub fn score_neighborhood<D: DrawSource + ?Sized>(hood: &mut Neighborhood, draws: &mut D) {
    for index in 0..CLOCK_SLOTS {
        let Some(tile) = hood.slot(index) else {
            continue;
        };

        let mut probability = if tile.content == Tile::Origin {
            -f64::from(draws.draw(ORIGIN_BASE_RANGE.0, ORIGIN_BASE_RANGE.1)) * SCALE
        } else {
            f64::from(draws.draw(OPEN_BASE_RANGE.0, OPEN_BASE_RANGE.1)) * SCALE
        };

        if is_origin(hood.left_of(index)) {
            probability += adjacency_bonus(draws);
        }
        if is_origin(hood.right_of(index)) {
            probability += adjacency_bonus(draws);
        }

        hood.set_probability(index, probability);
    }
}

fn is_origin(tile: Option<&SurroundingTile>) -> bool {
    tile.is_some_and(|t| t.content == Tile::Origin)
}

fn adjacency_bonus<D: DrawSource + ?Sized>(draws: &mut D) -> f64 {
    f64::from(draws.draw(ADJACENCY_BONUS_RANGE.0, ADJACENCY_BONUS_RANGE.1)) * SCALE
}

/// Picks the tile with the highest probability.
///
/// Ties go to the earliest tile in clock order. Returns `None` for an empty
/// neighborhood.
pub fn select_destination(hood: &Neighborhood) -> Option<&SurroundingTile> {
    let mut best: Option<&SurroundingTile> = None;
    for tile in hood.iter() {
        match best {
            Some(current) if tile.probability <= current.probability => {}
            _ => best = Some(tile),
        }
    }
    best
}
