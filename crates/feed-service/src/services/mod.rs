//! Business logic services
//!
//! The [`NewsFeedManager`] contract, its repository-backed implementation
//! and the dependency container they share.

pub mod context;
pub mod error;
pub mod manager;
pub mod news_feed;

pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use manager::{CommentsShort, NewsFeedManager, NewsFeedPublication, TOP_COMMENTS};
pub use news_feed::{NewsFeedService, COMMENT_MAX_LENGTH, PUBLICATION_MAX_LENGTH};
