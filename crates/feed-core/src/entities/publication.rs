//! Publication entity - a single post in the news feed

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Publication entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub id: Snowflake,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Publication {
    /// Create a new Publication
    pub fn new(id: Snowflake, author: String, content: String) -> Self {
        Self {
            id,
            author,
            content,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Check if publication has been updated since creation
    #[inline]
    pub fn is_updated(&self) -> bool {
        self.updated_at.is_some()
    }

    /// Replace the publication content
    pub fn update_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Some(Utc::now());
    }
}
