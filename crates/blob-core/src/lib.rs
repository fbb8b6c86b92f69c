//! Core types and shared knowledge for the blob foraging simulation.
//!
//! This is the leaf crate of the workspace. It defines the coordinate and
//! identifier types, the intensity bounds every other crate clamps against,
//! the strongly-typed [`BlobConfig`] and the colony-wide [`Knowledge`]
//! (configuration plus the registry of known food cells).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod id;
pub mod knowledge;

pub use config::{
    BlobConfig, GatheringConfig, HarvestConfig, PopulationWeights, ScouterConfig, ScoutingConfig,
};
pub use error::ConfigError;
pub use id::{AgentId, Cell, TickId};
pub use knowledge::Knowledge;

/// Upper bound of a cell's trail intensity.
pub const MAX_INTENSITY: f64 = 255.0;

/// Lower bound of a cell's trail intensity.
pub const MIN_INTENSITY: f64 = 0.0;

/// Food amount placed on a cell when no explicit amount is given.
pub const DEFAULT_FOOD: f64 = 100.0;
