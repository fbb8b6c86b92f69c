//! The [`Board`]: per-cell trail intensity, food, and touched flag.

use blob_core::{Cell, MAX_INTENSITY, MIN_INTENSITY};

use crate::region::BoardRegion;

/// Decayed intensities closer than this to the floor land on it.
const DECAY_SNAP: f64 = 1e-9;

/// The full state of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellState {
    /// Whether the cell ever received a trail deposit.
    pub touched: bool,
    /// Remaining food; `0.0` means no food.
    pub food: f64,
    /// Trail intensity in `[MIN_INTENSITY, MAX_INTENSITY]`.
    pub intensity: f64,
}

/// Outcome of [`Board::eat_food`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Harvest {
    /// Amount actually withdrawn, never more than was present.
    pub consumed: f64,
    /// Whether the cell holds no food after the call.
    pub depleted: bool,
}

/// A `width × height` grid of cells, stored row-major.
///
/// Every query is bounds-checked: out-of-bounds reads return `None` or
/// `false`, out-of-bounds writes are no-ops.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    width: u32,
    height: u32,
    intensity: Vec<f64>,
    food: Vec<f64>,
    touched: Vec<bool>,
}

impl Board {
    /// An empty, untouched board. Dimensions are clamped to at least 1.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let n = (width as usize) * (height as usize);
        Self {
            width,
            height,
            intensity: vec![MIN_INTENSITY; n],
            food: vec![0.0; n],
            touched: vec![false; n],
        }
    }

    /// Build a board from row-major cell states.
    ///
    /// Missing trailing cells stay empty; surplus states are ignored.
    /// Intensities are clamped and negative food is treated as none.
    pub fn from_states(width: u32, height: u32, states: impl IntoIterator<Item = CellState>) -> Self {
        let mut board = Self::new(width, height);
        let n = board.area();
        for (i, state) in states.into_iter().take(n).enumerate() {
            board.store(i, state);
        }
        board
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.intensity.len()
    }

    /// Whether `(x, y)` lies on the board.
    pub fn inside(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.inside(x, y) {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    fn cell_of(&self, i: usize) -> Cell {
        let w = self.width as usize;
        Cell::new((i % w) as i32, (i / w) as i32)
    }

    fn store(&mut self, i: usize, state: CellState) {
        self.touched[i] = state.touched;
        self.food[i] = if state.food > 0.0 { state.food } else { 0.0 };
        self.intensity[i] = state.intensity.clamp(MIN_INTENSITY, MAX_INTENSITY);
    }

    // ── Trail ──────────────────────────────────────────────────────

    /// Add `delta` to the intensity of `(x, y)`, clamped to the intensity
    /// bounds, and mark the cell touched. Returns `false` out of bounds.
    pub fn update_intensity(&mut self, x: i32, y: i32, delta: f64) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };
        self.touched[i] = true;
        self.intensity[i] = (self.intensity[i] + delta).clamp(MIN_INTENSITY, MAX_INTENSITY);
        true
    }

    /// Trail intensity of `(x, y)`.
    pub fn intensity(&self, x: i32, y: i32) -> Option<f64> {
        self.index(x, y).map(|i| self.intensity[i])
    }

    /// Whether `(x, y)` ever received a deposit.
    pub fn is_touched(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.touched[i])
    }

    // ── Food ───────────────────────────────────────────────────────

    /// Remaining food on `(x, y)`.
    pub fn food(&self, x: i32, y: i32) -> Option<f64> {
        self.index(x, y).map(|i| self.food[i])
    }

    /// Whether `(x, y)` holds food.
    pub fn has_food(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.food[i] > 0.0)
    }

    /// Put `value` food on `(x, y)` unless the cell already holds food.
    ///
    /// Returns `true` if food was placed. Non-positive values are ignored.
    pub fn set_food(&mut self, x: i32, y: i32, value: f64) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };
        if self.food[i] > 0.0 || !(value > 0.0) {
            return false;
        }
        self.food[i] = value;
        true
    }

    /// Clear all food on `(x, y)`. Returns `true` if there was any.
    pub fn remove_food(&mut self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(i) if self.food[i] > 0.0 => {
                self.food[i] = 0.0;
                true
            }
            _ => false,
        }
    }

    /// Withdraw up to `amount` food from `(x, y)`.
    pub fn eat_food(&mut self, x: i32, y: i32, amount: f64) -> Harvest {
        let Some(i) = self.index(x, y) else {
            return Harvest {
                consumed: 0.0,
                depleted: true,
            };
        };
        let present = self.food[i];
        let consumed = if present > 0.0 {
            amount.max(0.0).min(present)
        } else {
            0.0
        };
        self.food[i] = present - consumed;
        if self.food[i] < 0.0 {
            self.food[i] = 0.0;
        }
        Harvest {
            consumed,
            depleted: self.food[i] <= 0.0,
        }
    }

    // ── Cell state ─────────────────────────────────────────────────

    /// Full state of `(x, y)`.
    pub fn cell_state(&self, x: i32, y: i32) -> Option<CellState> {
        self.index(x, y).map(|i| CellState {
            touched: self.touched[i],
            food: self.food[i],
            intensity: self.intensity[i],
        })
    }

    /// Overwrite the full state of `(x, y)`, clamping as [`Board::from_states`] does.
    pub fn set_cell_state(&mut self, x: i32, y: i32, state: CellState) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.store(i, state);
                true
            }
            None => false,
        }
    }

    /// Restore `(x, y)` to its empty, untouched state.
    pub fn reset_cell(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.store(i, CellState::default());
        }
    }

    /// Every cell with its state, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        (0..self.area()).map(move |i| {
            (
                self.cell_of(i),
                CellState {
                    touched: self.touched[i],
                    food: self.food[i],
                    intensity: self.intensity[i],
                },
            )
        })
    }

    /// Touched cells with their intensity, row-major.
    pub fn touched_cells(&self) -> impl Iterator<Item = (Cell, f64)> + '_ {
        (0..self.area())
            .filter(move |&i| self.touched[i])
            .map(move |i| (self.cell_of(i), self.intensity[i]))
    }

    // ── Aggregates ─────────────────────────────────────────────────

    /// Percentage (`0..=100`) of touched cells in `region`.
    ///
    /// An empty region (top half of a one-row board) has zero coverage.
    pub fn coverage(&self, region: BoardRegion) -> f64 {
        let rows = region.rows(self.height);
        let w = self.width as usize;
        let start = rows.start as usize * w;
        let end = rows.end as usize * w;
        if end <= start {
            return 0.0;
        }
        let touched = self.touched[start..end].iter().filter(|&&t| t).count();
        touched as f64 / (end - start) as f64 * 100.0
    }

    /// Sum of all intensities as a percentage (`0..=100`) of the theoretical
    /// maximum `area × MAX_INTENSITY`.
    pub fn total_intensity(&self) -> f64 {
        let sum: f64 = self.intensity.iter().sum();
        sum / self.area() as f64 / MAX_INTENSITY * 100.0
    }

    /// Global evaporation pass.
    ///
    /// Lowers every touched cell by `rate`, except cells holding food whose
    /// intensity is already at or below `food_floor`.
    pub fn decay_pass(&mut self, rate: f64, food_floor: f64) {
        for i in 0..self.area() {
            if !self.touched[i] {
                continue;
            }
            if self.food[i] > 0.0 && self.intensity[i] <= food_floor {
                continue;
            }
            let decayed = (self.intensity[i] - rate).clamp(MIN_INTENSITY, MAX_INTENSITY);
            // Repeated subtraction leaves rounding residue above the floor.
            self.intensity[i] = if decayed - MIN_INTENSITY < DECAY_SNAP {
                MIN_INTENSITY
            } else {
                decayed
            };
        }
    }
}
