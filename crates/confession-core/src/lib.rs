//! # confession-core
//!
//! Domain layer for the confession board: the confession entity, the closed set
//! of reaction kinds, message rules, and the ports (store, rate limiter, content
//! filter) implemented by the outer crates.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{normalize_message, Confession, NewConfession, ReactionKind, Reactions};
pub use error::DomainError;
pub use traits::{
    ConfessionPage, ConfessionQuery, ConfessionRepository, ContentFilter, RateLimiter, RepoResult,
    SortOrder,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
