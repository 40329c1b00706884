//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub publication_id: i64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
