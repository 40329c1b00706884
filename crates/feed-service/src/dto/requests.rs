//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Blank (whitespace-only) content passes these checks and is rejected by the
//! service.

use feed_core::ReactionType;
use serde::Deserialize;
use validator::Validate;

/// Create publication request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePublicationRequest {
    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,
}

/// Update publication request (same shape as create)
pub type UpdatePublicationRequest = CreatePublicationRequest;

/// Add comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Content must be 1-1000 characters"))]
    pub content: String,
}

/// Add or replace reaction request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddReactionRequest {
    pub reaction: ReactionType,
}
