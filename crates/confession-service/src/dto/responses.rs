//! Response DTOs for API endpoints
//!
//! Field names are camelCase on the wire. Snowflake IDs are serialized as
//! strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use confession_core::Reactions;
use serde::{Deserialize, Serialize};

// ============================================================================
// Confession Responses
// ============================================================================

/// A confession as returned by every endpoint.
///
/// `ipHash` is part of the public shape even though it lets clients link
/// confessions posted from the same address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfessionResponse {
    pub id: String,
    pub message: String,
    pub reactions: Reactions,
    pub total_reactions: i64,
    pub ip_hash: String,
    pub created_at: DateTime<Utc>,
}

/// GET /confessions response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListConfessionsResponse {
    pub confessions: Vec<ConfessionResponse>,
    pub has_more: bool,
    pub page: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
}

impl ReadinessResponse {
    pub fn ready(storage_healthy: bool) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
