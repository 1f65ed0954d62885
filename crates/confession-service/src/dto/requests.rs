//! Request DTOs for API endpoints
//!
//! Every field is optional: a missing or empty value is a domain error the
//! services report in a fixed order, not a deserialization failure.

use serde::Deserialize;
use validator::Validate;

/// Default page number for listings
pub const DEFAULT_PAGE: i64 = 1;
/// Default page size for listings
pub const DEFAULT_LIMIT: i64 = 10;
/// Largest page size served
pub const MAX_LIMIT: i64 = 100;

// ============================================================================
// Confession Requests
// ============================================================================

/// POST /confessions body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateConfessionRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl CreateConfessionRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// GET /confessions query string
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListConfessionsQuery {
    /// `new`, `trending` or `random`; anything else lists newest first
    pub sort: Option<String>,

    #[validate(range(min = 1, message = "page must be a positive integer"))]
    pub page: Option<i64>,

    #[validate(range(min = 1, message = "limit must be a positive integer"))]
    pub limit: Option<i64>,
}

impl ListConfessionsQuery {
    pub fn page_or_default(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    /// Requested page size, capped at [`MAX_LIMIT`]
    pub fn limit_or_default(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT)
    }
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// POST /reactions body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactRequest {
    #[serde(default)]
    pub confession_id: Option<String>,

    #[serde(default)]
    pub reaction_type: Option<String>,
}

impl ReactRequest {
    pub fn new(confession_id: impl Into<String>, reaction_type: impl Into<String>) -> Self {
        Self {
            confession_id: Some(confession_id.into()),
            reaction_type: Some(reaction_type.into()),
        }
    }
}
