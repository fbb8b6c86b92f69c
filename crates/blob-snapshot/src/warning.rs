//! Diagnostics for degraded but recovered loads.

use std::fmt;

/// A problem found while decoding that was repaired with a default.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadWarning {
    /// A row held a different number of cells than the declared width.
    /// Missing cells are left empty, extra cells are dropped.
    RowWidthMismatch {
        /// Zero-based row.
        row: u32,
        /// Cells found.
        found: usize,
        /// Declared width.
        expected: u32,
    },
    /// The body held a different number of rows than the declared height.
    RowCountMismatch {
        /// Rows found.
        found: usize,
        /// Declared height.
        expected: u32,
    },
    /// A cell record was not a `touched,food,intensity` triple of valid
    /// values; the cell was left empty.
    MalformedCell {
        /// Column.
        x: u32,
        /// Row.
        y: u32,
        /// The offending record.
        record: String,
    },
    /// A known food cell holds no food on the restored board and was
    /// forgotten.
    StaleFood {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowWidthMismatch {
                row,
                found,
                expected,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::RowCountMismatch { found, expected } => {
                write!(f, "board has {found} rows, expected {expected}")
            }
            Self::MalformedCell { x, y, record } => {
                write!(f, "malformed cell ({x}, {y}): {record:?}")
            }
            Self::StaleFood { x, y } => write!(f, "known food ({x}, {y}) is gone"),
        }
    }
}

/// A decoded value with the warnings raised while decoding it.
#[derive(Clone, Debug)]
pub struct Decoded<T> {
    /// The (possibly repaired) value.
    pub value: T,
    /// Repairs applied, in input order.
    pub warnings: Vec<LoadWarning>,
}

impl<T> Decoded<T> {
    /// Whether the input decoded without any repair.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Discard the warnings.
    pub fn into_value(self) -> T {
        self.value
    }
}
