//! Entity to DTO mappers

use confession_core::entities::Confession;

use super::responses::ConfessionResponse;

impl From<&Confession> for ConfessionResponse {
    fn from(confession: &Confession) -> Self {
        Self {
            id: confession.id.to_string(),
            message: confession.message.clone(),
            reactions: confession.reactions,
            total_reactions: confession.total_reactions,
            ip_hash: confession.ip_hash.clone(),
            created_at: confession.created_at,
        }
    }
}

impl From<Confession> for ConfessionResponse {
    fn from(confession: Confession) -> Self {
        Self {
            id: confession.id.to_string(),
            message: confession.message,
            reactions: confession.reactions,
            total_reactions: confession.total_reactions,
            ip_hash: confession.ip_hash,
            created_at: confession.created_at,
        }
    }
}
