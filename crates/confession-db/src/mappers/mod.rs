//! Entity to model mappers
//!
//! - `From<ConfessionModel> for Confession`: database rows to domain objects
//! - `ConfessionInsert`: values bound by the insert statement
//! - `reaction_column`: reaction kind to counter column

mod confession;

pub use confession::{reaction_column, ConfessionInsert};
