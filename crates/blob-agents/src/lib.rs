//! Agents of the blob simulation.
//!
//! Every agent kind implements the [`Agent`] capability (`step` to move,
//! `update` to act on the cell it stands on) and receives the shared board,
//! knowledge and random source through an [`AgentContext`].
//!
//! Kinds, from simplest to richest:
//!
//! - [`DumbScouter`]: random walk plus a fixed trail deposit.
//! - [`SensingScouter`]: heads for the weakest trail in its sightline along a
//!   cost-weighted shortest path.
//! - [`AdvancedScouter`]: adds a "global" policy aiming at the emptiest
//!   neighbourhood, switching between the two at random.
//! - [`Gatherer`]: walks to a known food cell, projecting far goals onto
//!   existing trail at the edge of its sightline.
//! - [`FsmAnt`]: scouts while fed, gathers while starving.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod advanced;
pub mod context;
pub mod cost;
pub mod dumb;
pub mod fsm;
pub mod gatherer;
pub mod pathfinding;
pub mod route;
pub mod sensing;

pub use advanced::{AdvancedScouter, ExploreMode};
pub use context::{Agent, AgentContext, SimRng};
pub use cost::CostGrid;
pub use dumb::DumbScouter;
pub use fsm::{AntState, FsmAnt};
pub use gatherer::Gatherer;
pub use pathfinding::find_path;
pub use route::Route;
pub use sensing::SensingScouter;
