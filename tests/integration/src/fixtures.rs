//! Test fixtures and wire types
//!
//! Request bodies sent to, and response bodies read from, the gateway.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /newsfeed` and `PUT /newsfeed/{id}`
#[derive(Debug, Serialize)]
pub struct ContentRequest {
    pub content: String,
}

impl ContentRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Body of `POST /newsfeed/{id}/reaction`
#[derive(Debug, Serialize)]
pub struct ReactionRequest {
    pub reaction: String,
}

impl ReactionRequest {
    pub fn new(reaction: impl Into<String>) -> Self {
        Self {
            reaction: reaction.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FeedItem {
    pub id: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub reactions: ReactionSummary,
    pub comments: CommentsSummary,
}

#[derive(Debug, Deserialize)]
pub struct ReactionSummary {
    pub reactions: HashMap<String, i64>,
    pub user: Option<OwnReaction>,
}

#[derive(Debug, Deserialize)]
pub struct OwnReaction {
    pub reaction: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentsSummary {
    pub top_comments: Vec<CommentBody>,
    pub total_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentBody {
    pub id: String,
    pub publication_id: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}
