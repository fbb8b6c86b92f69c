//! Traversal cost grids built from the trail over a sightline window.
//!
//! Scouters are pushed away from strong trail (a fresh trail is expensive,
//! virgin ground is cheap). Gatherers are pulled along it (trail is cheap
//! relative to its intensity, virgin ground is free). Both treat a touched
//! cell whose trail has fully evaporated as the most expensive ground.

use blob_board::{Board, Window};
use blob_core::MAX_INTENSITY;

/// Multiplier applied to the scouting cost of a cell with live trail.
pub const SCOUTING_TRAIL_FACTOR: f64 = 1.5;

/// Cost of a touched cell whose trail decayed to nothing.
pub const DEAD_TRAIL_COST: f64 = MAX_INTENSITY * 2.0;

/// Scouting cost of a never-touched cell.
pub const UNTOUCHED_SCOUTING_COST: f64 = 1.0;

/// Gathering cost of a never-touched cell.
pub const UNTOUCHED_GATHERING_COST: f64 = 0.0;

/// Non-negative per-cell entering costs over a window, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct CostGrid {
    width: usize,
    height: usize,
    costs: Vec<f64>,
}

impl CostGrid {
    /// A grid whose cost at `(col, row)` is `f(col, row)`.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut costs = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                costs.push(f(col, row));
            }
        }
        Self {
            width,
            height,
            costs,
        }
    }

    /// A grid of uniform cost.
    pub fn uniform(width: usize, height: usize, cost: f64) -> Self {
        Self::from_fn(width, height, |_, _| cost)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cost of entering `(col, row)`, or `None` outside the grid.
    pub fn cost(&self, col: usize, row: usize) -> Option<f64> {
        if col < self.width && row < self.height {
            self.costs.get(row * self.width + col).copied()
        } else {
            None
        }
    }

    /// Overwrite the cost of `(col, row)`. Ignored outside the grid.
    pub fn set_cost(&mut self, col: usize, row: usize, cost: f64) {
        if col < self.width && row < self.height {
            self.costs[row * self.width + col] = cost;
        }
    }
}

fn grid_over(board: &Board, window: Window, cost: impl Fn(f64, bool) -> f64) -> CostGrid {
    CostGrid::from_fn(window.width(), window.height(), |col, row| {
        let cell = window.to_global(col, row);
        let intensity = board.intensity(cell.x, cell.y).unwrap_or_default();
        cost(intensity, board.is_touched(cell.x, cell.y))
    })
}

/// Costs a scouter pays inside `window`.
///
/// Live trail costs `(1 + MAX - intensity) * 1.5`, so the weaker the trail
/// the more it costs; a decayed trail costs [`DEAD_TRAIL_COST`] and
/// untouched ground [`UNTOUCHED_SCOUTING_COST`].
pub fn scouting_costs(board: &Board, window: Window) -> CostGrid {
    grid_over(board, window, |intensity, touched| {
        if intensity > 0.0 {
            (1.0 + MAX_INTENSITY - intensity) * SCOUTING_TRAIL_FACTOR
        } else if touched {
            DEAD_TRAIL_COST
        } else {
            UNTOUCHED_SCOUTING_COST
        }
    })
}

/// Costs a gatherer pays inside `window`.
///
/// Live trail costs `1 + MAX - intensity`; a decayed trail costs
/// [`DEAD_TRAIL_COST`] and untouched ground is free.
pub fn gathering_costs(board: &Board, window: Window) -> CostGrid {
    grid_over(board, window, |intensity, touched| {
        if intensity > 0.0 {
            1.0 + MAX_INTENSITY - intensity
        } else if touched {
            DEAD_TRAIL_COST
        } else {
            UNTOUCHED_GATHERING_COST
        }
    })
}
