//! Cell-wise comparison of two boards.
//!
//! Used to compare a simulated colony with one detected from a photograph
//! of the real organism.

use blob_core::Cell;

use crate::board::Board;

/// Per-cell differences `other - self` between two equally sized boards.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardDiff {
    width: u32,
    height: u32,
    food: Vec<f64>,
    intensity: Vec<f64>,
    touched_match: Vec<bool>,
}

impl BoardDiff {
    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 || cell.x as u32 >= self.width || cell.y as u32 >= self.height {
            return None;
        }
        Some(cell.y as usize * self.width as usize + cell.x as usize)
    }

    /// Food difference at `cell`.
    pub fn food_delta(&self, cell: Cell) -> Option<f64> {
        self.index(cell).map(|i| self.food[i])
    }

    /// Intensity difference at `cell`.
    pub fn intensity_delta(&self, cell: Cell) -> Option<f64> {
        self.index(cell).map(|i| self.intensity[i])
    }

    /// Whether both boards agree on the touched flag at `cell`.
    pub fn touched_match(&self, cell: Cell) -> Option<bool> {
        self.index(cell).map(|i| self.touched_match[i])
    }

    /// Percentage (`0..=100`) of cells whose touched flags agree.
    pub fn touched_agreement(&self) -> f64 {
        let agree = self.touched_match.iter().filter(|&&m| m).count();
        agree as f64 / self.touched_match.len() as f64 * 100.0
    }

    /// Largest absolute intensity difference.
    pub fn max_intensity_delta(&self) -> f64 {
        self.intensity.iter().fold(0.0, |acc, d| acc.max(d.abs()))
    }
}

impl Board {
    /// Compare with `other`, cell by cell.
    ///
    /// Returns `None` when the dimensions differ.
    pub fn compare(&self, other: &Board) -> Option<BoardDiff> {
        if self.width() != other.width() || self.height() != other.height() {
            tracing::warn!(
                width = self.width(),
                height = self.height(),
                other_width = other.width(),
                other_height = other.height(),
                "board sizes don't match"
            );
            return None;
        }
        let n = self.area();
        let mut diff = BoardDiff {
            width: self.width(),
            height: self.height(),
            food: Vec::with_capacity(n),
            intensity: Vec::with_capacity(n),
            touched_match: Vec::with_capacity(n),
        };
        for ((_, mine), (_, theirs)) in self.cells().zip(other.cells()) {
            diff.food.push(theirs.food - mine.food);
            diff.intensity.push(theirs.intensity - mine.intensity);
            diff.touched_match.push(mine.touched == theirs.touched);
        }
        Some(diff)
    }
}
