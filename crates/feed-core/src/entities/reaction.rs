//! Reaction entity - a typed sentiment marker on a publication

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Kind of reaction a user can leave on a publication
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionType {
    Like,
    Love,
    Haha,
    Wow,
    Sad,
    Angry,
}

impl ReactionType {
    /// All reaction types in display order
    pub const ALL: [ReactionType; 6] = [
        Self::Like,
        Self::Love,
        Self::Haha,
        Self::Wow,
        Self::Sad,
        Self::Angry,
    ];

    /// Stable string form, used for storage and JSON
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Love => "love",
            Self::Haha => "haha",
            Self::Wow => "wow",
            Self::Sad => "sad",
            Self::Angry => "angry",
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::InvalidReactionType(s.to_string()))
    }
}

/// Reaction entity
///
/// At most one reaction exists per (publication, author) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub publication_id: Snowflake,
    pub author: String,
    pub reaction_type: ReactionType,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(publication_id: Snowflake, author: String, reaction_type: ReactionType) -> Self {
        Self {
            publication_id,
            author,
            reaction_type,
            created_at: Utc::now(),
        }
    }
}

/// The current user's own reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserReaction {
    pub reaction_type: ReactionType,
}

/// Aggregated reactions on a publication, as seen by one user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionShort {
    pub counts: BTreeMap<ReactionType, i64>,
    pub user: Option<UserReaction>,
}

impl ReactionShort {
    /// Build from per-type counts and the viewer's own reaction.
    ///
    /// Zero counts are dropped.
    pub fn new(
        counts: impl IntoIterator<Item = (ReactionType, i64)>,
        user: Option<ReactionType>,
    ) -> Self {
        Self {
            counts: counts.into_iter().filter(|(_, count)| *count > 0).collect(),
            user: user.map(|reaction_type| UserReaction { reaction_type }),
        }
    }

    /// Total number of reactions across all types
    pub fn total(&self) -> i64 {
        self.counts.values().sum()
    }

    /// Count for a single type
    pub fn count(&self, reaction_type: ReactionType) -> i64 {
        self.counts.get(&reaction_type).copied().unwrap_or(0)
    }
}
