//! Test fixtures and data generators

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Counter for unique client addresses
static CLIENT_COUNTER: AtomicU32 = AtomicU32::new(1);

/// A client address no other test uses, so rate limits never collide
pub fn unique_ip() -> String {
    let n = CLIENT_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("10.{}.{}.{}", (n >> 16) & 0xff, (n >> 8) & 0xff, n & 0xff)
}

/// POST /confessions body
#[derive(Debug, Serialize)]
pub struct NewConfession {
    pub message: String,
}

impl NewConfession {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// POST /reactions body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReaction {
    pub confession_id: String,
    pub reaction_type: String,
}

impl NewReaction {
    pub fn new(confession_id: impl Into<String>, reaction_type: impl Into<String>) -> Self {
        Self {
            confession_id: confession_id.into(),
            reaction_type: reaction_type.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReactionCounts {
    pub love: i64,
    pub funny: i64,
    pub sad: i64,
    pub fire: i64,
    pub angry: i64,
}

/// Confession as served to clients
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confession {
    pub id: String,
    pub message: String,
    pub reactions: ReactionCounts,
    pub total_reactions: i64,
    pub ip_hash: String,
    pub created_at: DateTime<Utc>,
}

/// GET /confessions body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfessionPage {
    pub confessions: Vec<Confession>,
    pub has_more: bool,
    pub page: i64,
}
