//! Domain entities - core business objects

mod confession;
mod reaction;

pub use confession::{normalize_message, Confession, NewConfession};
pub use reaction::{ReactionKind, Reactions};
