//! Confession entity <-> model mapper

use confession_core::entities::{Confession, ReactionKind, Reactions};
use confession_core::value_objects::Snowflake;

use crate::models::ConfessionModel;

impl From<ConfessionModel> for Confession {
    fn from(model: ConfessionModel) -> Self {
        Confession {
            id: Snowflake::new(model.id),
            message: model.message,
            reactions: Reactions {
                love: model.love,
                funny: model.funny,
                sad: model.sad,
                fire: model.fire,
                angry: model.angry,
            },
            total_reactions: model.total_reactions,
            ip_hash: model.ip_hash,
            created_at: model.created_at,
        }
    }
}

/// Values for inserting a freshly created confession
pub struct ConfessionInsert<'a> {
    pub id: i64,
    pub message: &'a str,
    pub ip_hash: &'a str,
}

impl<'a> ConfessionInsert<'a> {
    pub fn new(confession: &'a Confession) -> Self {
        Self {
            id: confession.id.into_inner(),
            message: &confession.message,
            ip_hash: &confession.ip_hash,
        }
    }
}

/// Counter column for a reaction kind.
///
/// Column names come from this closed mapping only, so they are safe to
/// splice into SQL text.
pub const fn reaction_column(kind: ReactionKind) -> &'static str {
    match kind {
        ReactionKind::Love => "love",
        ReactionKind::Funny => "funny",
        ReactionKind::Sad => "sad",
        ReactionKind::Fire => "fire",
        ReactionKind::Angry => "angry",
    }
}
