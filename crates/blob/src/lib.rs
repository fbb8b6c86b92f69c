//! Blob: a slime-mould foraging simulation.
//!
//! This is the facade crate re-exporting the public API of the blob
//! sub-crates. Agents wander a grid, lay an evaporating trail, find food
//! and route back to it; the colony grows with the area it covers.
//!
//! # Quick start
//!
//! ```rust
//! use blob::prelude::*;
//!
//! let mut board = Board::new(40, 30);
//! board.set_food(20, 15, DEFAULT_FOOD);
//! board.update_intensity(20, 15, 50.0);
//!
//! let mut colony = BlobManager::new(board, BlobConfig::default(), 42).unwrap();
//! for _ in 0..10 {
//!     colony.step();
//! }
//! assert_eq!(colony.current_tick(), TickId(10));
//! assert!(colony.stats().coverage > 0.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `blob-core` | Cells, ids, configuration, knowledge |
//! | [`board`] | `blob-board` | The grid, sightline windows, regions, diffs |
//! | [`agents`] | `blob-agents` | Agent kinds and path planning |
//! | [`snapshot`] | `blob-snapshot` | Board and knowledge codecs, hashing |
//! | [`engine`] | `blob-engine` | Colony manager, player, sessions |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, configuration and knowledge (`blob-core`).
pub use blob_core as types;

/// The grid (`blob-board`).
///
/// [`board::Board`] holds trail, food and touched flags; [`board::Window`]
/// is an agent's sightline.
pub use blob_board as board;

/// Agents and path planning (`blob-agents`).
pub use blob_agents as agents;

/// Persistence (`blob-snapshot`).
pub use blob_snapshot as snapshot;

/// Colony management (`blob-engine`).
///
/// [`engine::BlobManager`] runs ticks; [`engine::Player`] edits the board
/// between them.
pub use blob_engine as engine;

/// Common imports for typical blob usage.
///
/// ```rust
/// use blob::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use blob_core::{
        AgentId, BlobConfig, Cell, ConfigError, Knowledge, TickId, DEFAULT_FOOD, MAX_INTENSITY,
        MIN_INTENSITY,
    };

    // Board
    pub use blob_board::{Board, BoardRegion, CellState, Window};

    // Agents
    pub use blob_agents::{Agent, AgentContext, AntState, FsmAnt};

    // Persistence
    pub use blob_snapshot::{board_hash, Decoded, LoadWarning, SnapshotError};

    // Engine
    pub use blob_engine::{
        load_session, save_session, AgentView, BlobManager, BlobStats, Player, SessionError,
        SessionFiles, TickReport,
    };
}
