//! Population control: how many agents the colony wants, and where new
//! ones appear.

use blob_agents::SimRng;
use blob_board::{Board, BoardRegion};
use blob_core::{Cell, Knowledge};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

/// Board area the population weights are calibrated against.
const REFERENCE_AREA: f64 = 100_000.0;

/// Target population for the current board and knowledge.
///
/// `(Wb·total_intensity + Wc·coverage + Wf·known_food) · Wg · area / 100000`,
/// truncated, never below `scouters.min`. Intensity and coverage are
/// percentages.
pub fn target_population(board: &Board, knowledge: &Knowledge) -> usize {
    let weights = &knowledge.config.computing;
    let floor = knowledge.config.scouters.min;
    let raw = (weights.blob_size_factor * board.total_intensity()
        + weights.covering_factor * board.coverage(BoardRegion::Whole)
        + weights.known_foods_factor * knowledge.food_count() as f64)
        * weights.global_factor
        * board.area() as f64
        / REFERENCE_AREA;
    if raw.is_finite() && raw > 0.0 {
        floor.max(raw as usize)
    } else {
        floor
    }
}

/// Where a new agent appears.
///
/// A uniformly random known food cell if any; otherwise a touched cell
/// drawn with weight `intensity + 1`; otherwise the origin.
pub fn spawn_site(board: &Board, knowledge: &Knowledge, rng: &mut SimRng) -> Cell {
    let count = knowledge.food_count();
    if count > 0 {
        if let Some(food) = knowledge.food_at(rng.random_range(0..count)) {
            return food;
        }
    }
    let (cells, weights): (Vec<Cell>, Vec<f64>) = board
        .touched_cells()
        .map(|(cell, intensity)| (cell, intensity + 1.0))
        .unzip();
    match WeightedIndex::new(&weights) {
        Ok(dist) => cells.get(dist.sample(rng)).copied().unwrap_or(Cell::ORIGIN),
        Err(_) => Cell::ORIGIN,
    }
}
