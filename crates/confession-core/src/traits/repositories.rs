//! Repository traits (ports) - define the interface for confession storage
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (Postgres or in-memory).

use std::fmt;

use async_trait::async_trait;

use crate::entities::{Confession, NewConfession, ReactionKind};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Listing order for confessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Newest first
    #[default]
    New,
    /// Most reactions first, newest first among equals
    Trending,
    /// Uniform sample, pagination ignored
    Random,
}

impl SortOrder {
    /// Parse a query value; anything unrecognised falls back to [`SortOrder::New`]
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            Some("trending") => Self::Trending,
            Some("random") => Self::Random,
            _ => Self::New,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Trending => "trending",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single listing request in storage terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfessionQuery {
    pub sort: SortOrder,
    /// Records to skip; ignored for [`SortOrder::Random`]
    pub skip: i64,
    pub limit: i64,
}

impl ConfessionQuery {
    /// Build a query from a 1-based page number.
    ///
    /// The offset saturates, so a page far past the end is simply empty.
    pub fn page(sort: SortOrder, page: i64, limit: i64) -> Self {
        Self {
            sort,
            skip: page.saturating_sub(1).max(0).saturating_mul(limit.max(0)),
            limit,
        }
    }
}

/// One page of confessions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfessionPage {
    pub items: Vec<Confession>,
    pub total: i64,
    pub has_more: bool,
}

impl ConfessionPage {
    /// Page from an offset listing; more records exist past `skip + items.len()`
    pub fn paged(items: Vec<Confession>, skip: i64, total: i64) -> Self {
        let has_more = skip.saturating_add(items.len() as i64) < total;
        Self {
            items,
            total,
            has_more,
        }
    }

    /// Page from a random sample, which never has a next page
    pub fn sampled(items: Vec<Confession>, total: i64) -> Self {
        Self {
            items,
            total,
            has_more: false,
        }
    }
}

#[async_trait]
pub trait ConfessionRepository: Send + Sync {
    /// Persist a new confession with zeroed reactions and return the stored record
    async fn insert(&self, new: NewConfession) -> RepoResult<Confession>;

    /// List confessions in the requested order
    async fn list(&self, query: ConfessionQuery) -> RepoResult<ConfessionPage>;

    /// Atomically add one reaction of `kind` and bump the total.
    ///
    /// Returns `None` when no confession has the given id.
    async fn increment_reaction(
        &self,
        id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<Option<Confession>>;

    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Confession>>;

    /// Total number of stored confessions
    async fn count(&self) -> RepoResult<i64>;

    /// Check that the backing store is reachable
    async fn health_check(&self) -> RepoResult<()>;
}
