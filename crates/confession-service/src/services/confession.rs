//! Confession service
//!
//! Lists the feed and creates new confessions.

use confession_common::short_hash;
use confession_core::{normalize_message, ConfessionQuery, NewConfession, SortOrder};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    ConfessionResponse, CreateConfessionRequest, ListConfessionsQuery, ListConfessionsResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Confession service
pub struct ConfessionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ConfessionService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List one page of confessions.
    ///
    /// Unknown sort values list newest first. Random listings ignore the
    /// requested page and always report page 1 with no further pages.
    #[instrument(skip(self))]
    pub async fn list(&self, query: ListConfessionsQuery) -> ServiceResult<ListConfessionsResponse> {
        query.validate().map_err(|errors| {
            let message = errors
                .field_errors()
                .into_values()
                .flatten()
                .find_map(|error| error.message.as_ref().map(ToString::to_string))
                .unwrap_or_else(|| "Invalid pagination parameters".to_string());
            ServiceError::validation(message)
        })?;

        let sort = SortOrder::parse_lenient(query.sort.as_deref());
        let page = query.page_or_default();
        let limit = query.limit_or_default();

        let result = self
            .ctx
            .confession_repo()
            .list(ConfessionQuery::page(sort, page, limit))
            .await?;

        Ok(ListConfessionsResponse {
            confessions: result.items.into_iter().map(ConfessionResponse::from).collect(),
            has_more: result.has_more,
            page: if sort == SortOrder::Random { 1 } else { page },
        })
    }

    /// Create a confession on behalf of the client identified by `ip_hash`.
    ///
    /// Checks run in a fixed order: rate limit, message rules, then the
    /// content filter. Nothing is stored unless all of them pass.
    #[instrument(skip(self, request, ip_hash), fields(client = %short_hash(ip_hash)))]
    pub async fn create(
        &self,
        request: CreateConfessionRequest,
        ip_hash: &str,
    ) -> ServiceResult<ConfessionResponse> {
        if !self.ctx.confession_limiter().allow(ip_hash) {
            warn!("Confession rate limit exceeded");
            return Err(ServiceError::RateLimited(ServiceError::CONFESSION_RATE_LIMITED));
        }

        let raw = request.message.unwrap_or_default();
        let message = normalize_message(&raw, self.ctx.max_message_length())?;
        let message = self.ctx.content_filter().clean(&message);

        let confession = self
            .ctx
            .confession_repo()
            .insert(NewConfession::new(message, ip_hash))
            .await?;

        info!(confession_id = %confession.id, "Confession created");

        Ok(ConfessionResponse::from(confession))
    }
}
