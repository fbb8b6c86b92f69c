//! Row ranges used for coverage reporting and half-board operations.

use std::ops::Range;

/// A horizontal slice of the board.
///
/// The halves split at `height / 2`: on an odd-height board the middle row
/// belongs to the bottom half.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoardRegion {
    /// Every row.
    #[default]
    Whole,
    /// Rows `0 .. height / 2`.
    TopHalf,
    /// Rows `height / 2 .. height`.
    BottomHalf,
}

impl BoardRegion {
    /// The rows covered by this region on a board of `height` rows.
    pub fn rows(self, height: u32) -> Range<u32> {
        let mid = height / 2;
        match self {
            Self::Whole => 0..height,
            Self::TopHalf => 0..mid,
            Self::BottomHalf => mid..height,
        }
    }

    /// The other half. `Whole` maps to itself.
    pub fn opposite(self) -> Self {
        match self {
            Self::Whole => Self::Whole,
            Self::TopHalf => Self::BottomHalf,
            Self::BottomHalf => Self::TopHalf,
        }
    }
}
