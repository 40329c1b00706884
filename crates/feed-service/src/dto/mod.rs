//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers from domain types to response DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    AddCommentRequest, AddReactionRequest, CreatePublicationRequest, UpdatePublicationRequest,
};

pub use responses::{
    CommentResponse, CommentsShortResponse, HealthResponse, NewsFeedPublicationResponse,
    ReactionShortResponse, ReadinessResponse, StorageCheck, UserReactionResponse,
};
