//! Database models - SQLx-compatible structs for PostgreSQL tables

mod confession;

pub use confession::ConfessionModel;
