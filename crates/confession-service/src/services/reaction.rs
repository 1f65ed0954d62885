//! Reaction service
//!
//! Adds one reaction to an existing confession.

use confession_common::short_hash;
use confession_core::{DomainError, ReactionKind, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{ConfessionResponse, ReactRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record one reaction from the client identified by `ip_hash`.
    ///
    /// Order: required fields, reaction kind, rate limit (per client and
    /// confession), then the atomic store increment.
    #[instrument(skip(self, request, ip_hash), fields(client = %short_hash(ip_hash)))]
    pub async fn react(&self, request: ReactRequest, ip_hash: &str) -> ServiceResult<ConfessionResponse> {
        let (confession_id, reaction_type) = match (request.confession_id, request.reaction_type) {
            (Some(id), Some(kind)) if !id.is_empty() && !kind.is_empty() => (id, kind),
            _ => return Err(DomainError::MissingFields.into()),
        };

        let kind: ReactionKind = reaction_type.parse()?;

        let key = format!("{ip_hash}-{confession_id}");
        if !self.ctx.reaction_limiter().allow(&key) {
            warn!(%confession_id, "Reaction rate limit exceeded");
            return Err(ServiceError::RateLimited(ServiceError::REACTION_RATE_LIMITED));
        }

        // An id that does not parse cannot name any stored confession
        let id = Snowflake::parse(&confession_id)
            .map_err(|_| DomainError::ConfessionNotFound(confession_id.clone()))?;

        let confession = self
            .ctx
            .confession_repo()
            .increment_reaction(id, kind)
            .await?
            .ok_or(DomainError::ConfessionNotFound(confession_id))?;

        info!(
            confession_id = %confession.id,
            reaction = %kind,
            total = confession.total_reactions,
            "Reaction added"
        );

        Ok(ConfessionResponse::from(confession))
    }
}
