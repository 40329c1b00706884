//! Comment entity - a reply attached to a publication

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Comment entity
///
/// Comments are immutable once created; they can only be deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub publication_id: Snowflake,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(id: Snowflake, publication_id: Snowflake, author: String, content: String) -> Self {
        Self {
            id,
            publication_id,
            author,
            content,
            created_at: Utc::now(),
        }
    }

    /// Check if this comment belongs to the given publication
    #[inline]
    pub fn belongs_to(&self, publication_id: Snowflake) -> bool {
        self.publication_id == publication_id
    }
}
