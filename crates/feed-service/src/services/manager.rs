//! The news feed manager contract
//!
//! Everything the HTTP layer does with publications, comments and reactions
//! goes through [`NewsFeedManager`]. Handlers hold it as
//! `Arc<dyn NewsFeedManager>`, so alternative implementations (or test
//! doubles) can be injected without touching the routes.

use async_trait::async_trait;

use feed_core::{Comment, Page, Publication, ReactionShort, ReactionType, Snowflake};

use super::error::ServiceResult;

/// Number of comments embedded in each feed item
pub const TOP_COMMENTS: i64 = 3;

/// A publication as it appears in a viewer's feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsFeedPublication {
    pub publication: Publication,
    /// Reaction counts, with the viewer's own reaction when known
    pub reactions: ReactionShort,
    pub comments: CommentsShort,
}

/// First comments of a publication plus the full count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentsShort {
    pub top_comments: Vec<Comment>,
    pub total_count: i64,
}

impl From<Page<Comment>> for CommentsShort {
    fn from(page: Page<Comment>) -> Self {
        Self {
            top_comments: page.items,
            total_count: page.total_count,
        }
    }
}

/// Single authority over feed reads and writes
#[async_trait]
pub trait NewsFeedManager: Send + Sync {
    /// Feed page, newest first; `viewer` scopes the embedded reaction summary
    async fn find_many(
        &self,
        skip: i64,
        take: i64,
        viewer: Option<&str>,
    ) -> ServiceResult<Page<NewsFeedPublication>>;

    async fn create(&self, content: &str, author: &str) -> ServiceResult<NewsFeedPublication>;

    async fn update(&self, id: Snowflake, content: &str) -> ServiceResult<()>;

    /// Removes the publication together with its comments and reactions
    async fn delete(&self, id: Snowflake) -> ServiceResult<()>;

    async fn add_comment(
        &self,
        publication_id: Snowflake,
        author: &str,
        content: &str,
    ) -> ServiceResult<()>;

    async fn get_comment_by_id(&self, id: Snowflake) -> ServiceResult<Comment>;

    /// Comments of a publication, oldest first
    async fn search_comments(
        &self,
        publication_id: Snowflake,
        skip: i64,
        take: i64,
    ) -> ServiceResult<Page<Comment>>;

    async fn get_reactions(&self, publication_id: Snowflake, author: &str)
        -> ServiceResult<ReactionShort>;

    /// Insert or replace `author`'s reaction
    async fn add_reaction(
        &self,
        publication_id: Snowflake,
        author: &str,
        reaction_type: ReactionType,
    ) -> ServiceResult<()>;

    /// No-op when `author` has no reaction on the publication
    async fn remove_reaction(&self, publication_id: Snowflake, author: &str) -> ServiceResult<()>;

    async fn delete_comment(&self, id: Snowflake) -> ServiceResult<()>;
}
