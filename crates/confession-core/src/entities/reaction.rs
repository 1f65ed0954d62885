//! Reaction kinds and the per-confession reaction counters

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The closed set of reactions a visitor can leave on a confession
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Love,
    Funny,
    Sad,
    Fire,
    Angry,
}

impl ReactionKind {
    /// Every reaction kind, in display order
    pub const ALL: [ReactionKind; 5] = [
        ReactionKind::Love,
        ReactionKind::Funny,
        ReactionKind::Sad,
        ReactionKind::Fire,
        ReactionKind::Angry,
    ];

    /// Wire name of the reaction
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Love => "love",
            Self::Funny => "funny",
            Self::Sad => "sad",
            Self::Fire => "fire",
            Self::Angry => "angry",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReactionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::InvalidReactionType(s.to_string()))
    }
}

/// Reaction counters, one per kind, all starting at zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    pub love: i64,
    pub funny: i64,
    pub sad: i64,
    pub fire: i64,
    pub angry: i64,
}

impl Reactions {
    /// Count for a single kind
    pub fn get(&self, kind: ReactionKind) -> i64 {
        match kind {
            ReactionKind::Love => self.love,
            ReactionKind::Funny => self.funny,
            ReactionKind::Sad => self.sad,
            ReactionKind::Fire => self.fire,
            ReactionKind::Angry => self.angry,
        }
    }

    /// Add one reaction of the given kind
    pub fn increment(&mut self, kind: ReactionKind) {
        let slot = match kind {
            ReactionKind::Love => &mut self.love,
            ReactionKind::Funny => &mut self.funny,
            ReactionKind::Sad => &mut self.sad,
            ReactionKind::Fire => &mut self.fire,
            ReactionKind::Angry => &mut self.angry,
        };
        *slot += 1;
    }

    /// Sum over every kind
    pub fn total(&self) -> i64 {
        ReactionKind::ALL.into_iter().map(|kind| self.get(kind)).sum()
    }
}
