//! Sightline windows: clipped rectangles around an agent.

use blob_core::Cell;

use crate::board::Board;

/// A half-open rectangle `[x0, x1) × [y0, y1)` of board cells.
///
/// Windows produced by [`Window::around`] are always clipped to the board
/// and never empty for an on-board centre.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Window {
    /// First column.
    pub x0: i32,
    /// First row.
    pub y0: i32,
    /// One past the last column.
    pub x1: i32,
    /// One past the last row.
    pub y1: i32,
}

impl Window {
    /// The whole board.
    pub fn whole(board: &Board) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: board.width() as i32,
            y1: board.height() as i32,
        }
    }

    /// The square of radius `radius` centred on `center`, clipped to the
    /// board. A radius `<= 0` selects the whole board.
    pub fn around(board: &Board, center: Cell, radius: i32) -> Self {
        if radius <= 0 {
            return Self::whole(board);
        }
        Self {
            x0: (center.x - radius).max(0),
            y0: (center.y - radius).max(0),
            x1: (center.x + radius + 1).min(board.width() as i32),
            y1: (center.y + radius + 1).min(board.height() as i32),
        }
    }

    /// The intersection of two windows (possibly empty).
    pub fn intersect(self, other: Window) -> Self {
        Self {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        (self.x1 - self.x0).max(0) as usize
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        (self.y1 - self.y0).max(0) as usize
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// Whether the window covers no cell.
    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Whether `cell` lies inside the window.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.x0 && cell.x < self.x1 && cell.y >= self.y0 && cell.y < self.y1
    }

    /// Window-local `(column, row)` of an absolute cell inside the window.
    pub fn to_local(&self, cell: Cell) -> Option<(usize, usize)> {
        if self.contains(cell) {
            Some(((cell.x - self.x0) as usize, (cell.y - self.y0) as usize))
        } else {
            None
        }
    }

    /// Absolute cell of a window-local `(column, row)`.
    pub fn to_global(&self, col: usize, row: usize) -> Cell {
        Cell::new(self.x0 + col as i32, self.y0 + row as i32)
    }

    /// Every cell of the window, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (x0, x1) = (self.x0, self.x1);
        (self.y0..self.y1).flat_map(move |y| (x0..x1).map(move |x| Cell::new(x, y)))
    }
}
