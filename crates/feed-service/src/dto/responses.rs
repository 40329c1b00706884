//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use feed_core::ReactionType;
use serde::Serialize;

// ============================================================================
// Feed Responses
// ============================================================================

/// A publication as shown in the feed
#[derive(Debug, Clone, Serialize)]
pub struct NewsFeedPublicationResponse {
    pub id: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub reactions: ReactionShortResponse,
    pub comments: CommentsShortResponse,
}

/// Reaction counts plus the caller's own reaction
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReactionShortResponse {
    pub reactions: BTreeMap<ReactionType, i64>,
    pub user: Option<UserReactionResponse>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UserReactionResponse {
    pub reaction: ReactionType,
}

/// First comments of a publication
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommentsShortResponse {
    pub top_comments: Vec<CommentResponse>,
    pub total_count: i64,
}

// ============================================================================
// Comment Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub publication_id: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: StorageCheck,
}

/// Storage backend status
#[derive(Debug, Clone, Serialize)]
pub struct StorageCheck {
    pub backend: String,
    pub storage: String,
}

impl ReadinessResponse {
    pub fn new(backend: &str, storage_healthy: bool) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: StorageCheck {
                backend: backend.to_string(),
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
