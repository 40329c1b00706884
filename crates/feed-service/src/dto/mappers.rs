//! Domain to DTO mappers
//!
//! Implements `From` conversions from domain types to response DTOs.

use feed_core::{Comment, ReactionShort};

use crate::services::{CommentsShort, NewsFeedPublication};

use super::responses::{
    CommentResponse, CommentsShortResponse, NewsFeedPublicationResponse, ReactionShortResponse,
    UserReactionResponse,
};

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            publication_id: comment.publication_id.to_string(),
            author: comment.author,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

impl From<ReactionShort> for ReactionShortResponse {
    fn from(short: ReactionShort) -> Self {
        Self {
            reactions: short.counts,
            user: short.user.map(|u| UserReactionResponse {
                reaction: u.reaction_type,
            }),
        }
    }
}

impl From<CommentsShort> for CommentsShortResponse {
    fn from(comments: CommentsShort) -> Self {
        Self {
            top_comments: comments
                .top_comments
                .into_iter()
                .map(CommentResponse::from)
                .collect(),
            total_count: comments.total_count,
        }
    }
}

impl From<NewsFeedPublication> for NewsFeedPublicationResponse {
    fn from(item: NewsFeedPublication) -> Self {
        let publication = item.publication;
        Self {
            id: publication.id.to_string(),
            content: publication.content,
            author: publication.author,
            created_at: publication.created_at,
            updated_at: publication.updated_at,
            reactions: item.reactions.into(),
            comments: item.comments.into(),
        }
    }
}
