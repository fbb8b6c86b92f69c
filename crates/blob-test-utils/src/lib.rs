//! Test utilities for blob simulation development.
//!
//! Provides a [`TestBoardBuilder`] for laying out food and trail, an
//! [`AgentHarness`] owning everything an [`AgentContext`] borrows, and a
//! few canned configurations.
//!
//! [`AgentContext`]: blob_agents::AgentContext

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{lean_config, seeded_rng, AgentHarness, TestBoardBuilder};
