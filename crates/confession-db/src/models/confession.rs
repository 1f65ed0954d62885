//! Confession database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the confessions table
#[derive(Debug, Clone, FromRow)]
pub struct ConfessionModel {
    pub id: i64,
    pub message: String,
    pub love: i64,
    pub funny: i64,
    pub sad: i64,
    pub fire: i64,
    pub angry: i64,
    pub total_reactions: i64,
    pub ip_hash: String,
    pub created_at: DateTime<Utc>,
}
