//! Colony management for the blob simulation.
//!
//! [`BlobManager`] owns the board, the shared [`Knowledge`], the agents and
//! the random source, and runs the tick. [`Player`] wraps the operations an
//! experimenter performs between ticks, and [`session`] saves and restores
//! a whole simulation.
//!
//! [`Knowledge`]: blob_core::Knowledge

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod manager;
pub mod player;
pub mod population;
pub mod session;
pub mod stats;

pub use error::SessionError;
pub use manager::BlobManager;
pub use player::Player;
pub use session::{load_session, save_session, LoadedSession, SessionFiles};
pub use stats::{AgentView, BlobStats, TickReport};
