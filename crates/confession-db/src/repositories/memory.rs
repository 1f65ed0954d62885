//! Process-local implementation of ConfessionRepository
//!
//! Backs `STORAGE_BACKEND=memory` and the test suites. All records live in a
//! single `Vec` behind a `parking_lot::RwLock`; every mutation happens under
//! the write lock, so increments are atomic per process.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use rand::seq::SliceRandom;
use tracing::instrument;

use confession_core::entities::{Confession, NewConfession, ReactionKind};
use confession_core::error::DomainError;
use confession_core::traits::{
    ConfessionPage, ConfessionQuery, ConfessionRepository, RepoResult, SortOrder,
};
use confession_core::value_objects::{Snowflake, SnowflakeGenerator};

use super::error::to_usize;

/// In-memory confession store
pub struct MemoryConfessionRepository {
    records: RwLock<Vec<Confession>>,
    ids: Arc<SnowflakeGenerator>,
    max_message_length: usize,
}

impl MemoryConfessionRepository {
    pub fn new(ids: Arc<SnowflakeGenerator>) -> Self {
        Self::with_max_length(ids, Confession::MAX_MESSAGE_LENGTH)
    }

    pub fn with_max_length(ids: Arc<SnowflakeGenerator>, max_message_length: usize) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            ids,
            max_message_length,
        }
    }

    /// Store a fully formed record as-is (fixtures)
    pub fn seed(&self, confession: Confession) {
        self.records.write().push(confession);
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    fn newest_first(a: &Confession, b: &Confession) -> Ordering {
        b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id))
    }

    fn most_reacted_first(a: &Confession, b: &Confession) -> Ordering {
        b.total_reactions
            .cmp(&a.total_reactions)
            .then_with(|| Self::newest_first(a, b))
    }
}

impl Default for MemoryConfessionRepository {
    fn default() -> Self {
        Self::new(Arc::new(SnowflakeGenerator::default()))
    }
}

#[async_trait]
impl ConfessionRepository for MemoryConfessionRepository {
    #[instrument(skip(self, new))]
    async fn insert(&self, new: NewConfession) -> RepoResult<Confession> {
        let length = new.message.chars().count();
        if length == 0 || length > self.max_message_length {
            return Err(DomainError::DatabaseError(format!(
                "message length {length} outside 1..={}",
                self.max_message_length
            )));
        }

        let mut records = self.records.write();
        let confession = Confession::new(self.ids.generate(), new.message, new.ip_hash);
        records.push(confession.clone());

        Ok(confession)
    }

    #[instrument(skip(self))]
    async fn list(&self, query: ConfessionQuery) -> RepoResult<ConfessionPage> {
        let records = self.records.read();
        let total = records.len() as i64;
        let limit = to_usize(query.limit);

        if query.sort == SortOrder::Random {
            let sample = records
                .choose_multiple(&mut rand::thread_rng(), limit)
                .cloned()
                .collect();
            return Ok(ConfessionPage::sampled(sample, total));
        }

        let mut ordered: Vec<&Confession> = records.iter().collect();
        match query.sort {
            SortOrder::Trending => ordered.sort_by(|a, b| Self::most_reacted_first(a, b)),
            _ => ordered.sort_by(|a, b| Self::newest_first(a, b)),
        }

        let skip = query.skip.max(0);
        let items = ordered
            .into_iter()
            .skip(to_usize(skip))
            .take(limit)
            .cloned()
            .collect();

        Ok(ConfessionPage::paged(items, skip, total))
    }

    #[instrument(skip(self))]
    async fn increment_reaction(
        &self,
        id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<Option<Confession>> {
        let mut records = self.records.write();

        Ok(records.iter_mut().find(|c| c.id == id).map(|confession| {
            confession.add_reaction(kind);
            confession.clone()
        }))
    }

    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Confession>> {
        Ok(self.records.read().iter().find(|c| c.id == id).cloned())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.records.read().len() as i64)
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}
