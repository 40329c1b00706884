//! Publication database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for publications table
#[derive(Debug, Clone, FromRow)]
pub struct PublicationModel {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
