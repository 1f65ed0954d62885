//! Confession entity - an anonymous message and its reaction counters

use chrono::{DateTime, Utc};

use crate::entities::{ReactionKind, Reactions};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Confession entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confession {
    pub id: Snowflake,
    pub message: String,
    pub reactions: Reactions,
    /// Always equal to `reactions.total()`
    pub total_reactions: i64,
    pub ip_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Confession {
    /// Default maximum message length, in characters, after trimming
    pub const MAX_MESSAGE_LENGTH: usize = 300;

    /// Create a new Confession with every reaction at zero
    pub fn new(id: Snowflake, message: String, ip_hash: String) -> Self {
        Self {
            id,
            message,
            reactions: Reactions::default(),
            total_reactions: 0,
            ip_hash,
            created_at: Utc::now(),
        }
    }

    /// Record one reaction and keep the total in step
    pub fn add_reaction(&mut self, kind: ReactionKind) {
        self.reactions.increment(kind);
        self.total_reactions = self.reactions.total();
    }

    /// Check the total against the per-kind counters
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.total_reactions == self.reactions.total()
    }
}

/// Input for a store insert; id and timestamp are assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConfession {
    pub message: String,
    pub ip_hash: String,
}

impl NewConfession {
    pub fn new(message: impl Into<String>, ip_hash: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ip_hash: ip_hash.into(),
        }
    }
}

/// Trim a raw message and enforce the required / maximum length rules.
///
/// Length is counted in characters, not bytes.
pub fn normalize_message(raw: &str, max_len: usize) -> Result<String, DomainError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(DomainError::MessageRequired);
    }

    if trimmed.chars().count() > max_len {
        return Err(DomainError::MessageTooLong { max: max_len });
    }

    Ok(trimmed.to_string())
}
