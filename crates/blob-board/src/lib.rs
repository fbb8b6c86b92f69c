//! The blob's board: a bounded trail-intensity field with food.
//!
//! [`Board`] owns three per-cell arrays (intensity, food, touched) and
//! offers bounds-checked mutation, aggregate queries and the global decay
//! pass. [`Window`] describes an agent's clipped sightline rectangle,
//! [`BoardRegion`] the half-board slices used for reporting, and
//! [`BoardDiff`] the result of comparing two boards.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod diff;
pub mod region;
pub mod window;

pub use board::{Board, CellState, Harvest};
pub use diff::BoardDiff;
pub use region::BoardRegion;
pub use window::Window;
