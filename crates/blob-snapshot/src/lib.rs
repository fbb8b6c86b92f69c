//! Persistence for the blob simulation.
//!
//! - Boards use a line-oriented text format: a `"W H"` header, then one
//!   line per row of space-separated `touched,food,intensity` triples
//!   (`touched` is `1` or `0`).
//! - Knowledge (configuration plus known food) is JSON.
//!
//! Decoding is best-effort where the data allows it: recoverable problems
//! come back as [`LoadWarning`]s inside a [`Decoded`] value (and are
//! logged); only unusable input is a [`SnapshotError`].
//!
//! [`board_hash`] fingerprints a board for determinism checks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board_codec;
pub mod error;
pub mod hash;
pub mod knowledge_codec;
pub mod warning;

pub use board_codec::{decode_board, encode_board};
pub use error::SnapshotError;
pub use hash::board_hash;
pub use knowledge_codec::{decode_knowledge, encode_knowledge, KnowledgeRecord};
pub use warning::{Decoded, LoadWarning};
