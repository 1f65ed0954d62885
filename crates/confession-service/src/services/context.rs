//! Service context - dependency container for services
//!
//! Holds the confession store, the content filter and both rate limiters.
//! Every component is injected, so tests can swap in fresh limiters or a
//! different store without touching global state.

use std::sync::Arc;
use std::time::Duration;

use confession_core::traits::{ConfessionRepository, ContentFilter, RateLimiter};
use confession_core::Confession;

use crate::filter::WordListFilter;
use crate::limiter::SlidingWindowLimiter;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    confession_repo: Arc<dyn ConfessionRepository>,
    content_filter: Arc<dyn ContentFilter>,
    confession_limiter: Arc<dyn RateLimiter>,
    reaction_limiter: Arc<dyn RateLimiter>,
    max_message_length: usize,
}

impl ServiceContext {
    pub fn new(
        confession_repo: Arc<dyn ConfessionRepository>,
        content_filter: Arc<dyn ContentFilter>,
        confession_limiter: Arc<dyn RateLimiter>,
        reaction_limiter: Arc<dyn RateLimiter>,
        max_message_length: usize,
    ) -> Self {
        Self {
            confession_repo,
            content_filter,
            confession_limiter,
            reaction_limiter,
            max_message_length,
        }
    }

    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the confession store
    pub fn confession_repo(&self) -> &dyn ConfessionRepository {
        self.confession_repo.as_ref()
    }

    pub fn content_filter(&self) -> &dyn ContentFilter {
        self.content_filter.as_ref()
    }

    /// Limiter guarding confession creation, keyed by client hash
    pub fn confession_limiter(&self) -> &dyn RateLimiter {
        self.confession_limiter.as_ref()
    }

    /// Limiter guarding reactions, keyed by client hash and confession id
    pub fn reaction_limiter(&self) -> &dyn RateLimiter {
        self.reaction_limiter.as_ref()
    }

    pub fn max_message_length(&self) -> usize {
        self.max_message_length
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("confession_repo", &"dyn ConfessionRepository")
            .field("content_filter", &"dyn ContentFilter")
            .field("limiters", &"...")
            .field("max_message_length", &self.max_message_length)
            .finish()
    }
}

/// Builder for ServiceContext.
///
/// Only the store is required; everything else falls back to the stock
/// limits (5 creations per minute, 20 reactions per 30 seconds), the default
/// word list and the 300 character message limit.
pub struct ServiceContextBuilder {
    confession_repo: Option<Arc<dyn ConfessionRepository>>,
    content_filter: Option<Arc<dyn ContentFilter>>,
    confession_limiter: Option<Arc<dyn RateLimiter>>,
    reaction_limiter: Option<Arc<dyn RateLimiter>>,
    max_message_length: usize,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            confession_repo: None,
            content_filter: None,
            confession_limiter: None,
            reaction_limiter: None,
            max_message_length: Confession::MAX_MESSAGE_LENGTH,
        }
    }

    pub fn confession_repo(mut self, repo: Arc<dyn ConfessionRepository>) -> Self {
        self.confession_repo = Some(repo);
        self
    }

    pub fn content_filter(mut self, filter: Arc<dyn ContentFilter>) -> Self {
        self.content_filter = Some(filter);
        self
    }

    pub fn confession_limiter(mut self, limiter: Arc<dyn RateLimiter>) -> Self {
        self.confession_limiter = Some(limiter);
        self
    }

    pub fn reaction_limiter(mut self, limiter: Arc<dyn RateLimiter>) -> Self {
        self.reaction_limiter = Some(limiter);
        self
    }

    pub fn max_message_length(mut self, max: usize) -> Self {
        self.max_message_length = max;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if the store is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let confession_repo = self
            .confession_repo
            .ok_or_else(|| ServiceError::internal("confession_repo is required"))?;

        Ok(ServiceContext::new(
            confession_repo,
            self.content_filter
                .unwrap_or_else(|| Arc::new(WordListFilter::default())),
            self.confession_limiter.unwrap_or_else(|| {
                Arc::new(SlidingWindowLimiter::new(Duration::from_secs(60), 5))
            }),
            self.reaction_limiter.unwrap_or_else(|| {
                Arc::new(SlidingWindowLimiter::new(Duration::from_secs(30), 20))
            }),
            self.max_message_length,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
