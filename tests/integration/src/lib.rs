//! Integration test utilities for the confession board
//!
//! Spawns the full HTTP stack on an ephemeral port over the in-memory store
//! and drives it with a real HTTP client.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
