//! News feed service
//!
//! Repository-backed implementation of [`NewsFeedManager`].

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::{try_join, try_join_all};
use tracing::{info, instrument};

use feed_core::{
    Comment, DomainError, Page, Publication, Reaction, ReactionShort, ReactionType, Snowflake,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::manager::{CommentsShort, NewsFeedManager, NewsFeedPublication, TOP_COMMENTS};

/// Maximum publication length in characters
pub const PUBLICATION_MAX_LENGTH: usize = 5000;
/// Maximum comment length in characters
pub const COMMENT_MAX_LENGTH: usize = 1000;

/// Reject blank or oversized content
fn validate_content(content: &str, max: usize) -> Result<(), DomainError> {
    if content.trim().is_empty() {
        return Err(DomainError::BlankContent);
    }
    if content.chars().count() > max {
        return Err(DomainError::ContentTooLong { max });
    }
    Ok(())
}

/// News feed service
#[derive(Debug, Clone)]
pub struct NewsFeedService {
    ctx: Arc<ServiceContext>,
}

impl NewsFeedService {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    async fn ensure_publication(&self, id: Snowflake) -> ServiceResult<()> {
        if self.ctx.publication_repo().exists(id).await? {
            Ok(())
        } else {
            Err(ServiceError::publication_not_found(id))
        }
    }

    async fn reaction_summary(
        &self,
        publication_id: Snowflake,
        viewer: Option<&str>,
    ) -> ServiceResult<ReactionShort> {
        let repo = self.ctx.reaction_repo();

        let own = async {
            match viewer {
                Some(author) => repo.find(publication_id, author).await,
                None => Ok(None),
            }
        };
        let (counts, own) = try_join(repo.count_by_type(publication_id), own).await?;

        Ok(ReactionShort::new(counts, own.map(|r| r.reaction_type)))
    }

    async fn to_feed_item(
        &self,
        publication: Publication,
        viewer: Option<&str>,
    ) -> ServiceResult<NewsFeedPublication> {
        let comments = async {
            self.ctx
                .comment_repo()
                .find_by_publication(publication.id, 0, TOP_COMMENTS)
                .await
                .map_err(ServiceError::from)
        };
        let (reactions, comments) =
            try_join(self.reaction_summary(publication.id, viewer), comments).await?;

        Ok(NewsFeedPublication {
            publication,
            reactions,
            comments: CommentsShort::from(comments),
        })
    }
}

#[async_trait]
impl NewsFeedManager for NewsFeedService {
    #[instrument(skip(self))]
    async fn find_many(
        &self,
        skip: i64,
        take: i64,
        viewer: Option<&str>,
    ) -> ServiceResult<Page<NewsFeedPublication>> {
        let page = self.ctx.publication_repo().find_many(skip, take).await?;

        let items = try_join_all(
            page.items
                .into_iter()
                .map(|publication| self.to_feed_item(publication, viewer)),
        )
        .await?;

        Ok(Page::new(items, page.total_count))
    }

    #[instrument(skip(self, content))]
    async fn create(&self, content: &str, author: &str) -> ServiceResult<NewsFeedPublication> {
        validate_content(content, PUBLICATION_MAX_LENGTH)?;

        let publication = Publication::new(
            self.ctx.generate_id(),
            author.to_string(),
            content.to_string(),
        );
        self.ctx.publication_repo().create(&publication).await?;

        info!(publication_id = %publication.id, author = %author, "Publication created");

        Ok(NewsFeedPublication {
            publication,
            reactions: ReactionShort::default(),
            comments: CommentsShort::default(),
        })
    }

    #[instrument(skip(self, content))]
    async fn update(&self, id: Snowflake, content: &str) -> ServiceResult<()> {
        validate_content(content, PUBLICATION_MAX_LENGTH)?;

        let mut publication = self
            .ctx
            .publication_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::publication_not_found(id))?;

        publication.update_content(content.to_string());
        if !self.ctx.publication_repo().update(&publication).await? {
            return Err(ServiceError::publication_not_found(id));
        }

        info!(publication_id = %id, "Publication updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> ServiceResult<()> {
        self.ensure_publication(id).await?;

        let comments = self.ctx.comment_repo().delete_by_publication(id).await?;
        let reactions = self.ctx.reaction_repo().delete_by_publication(id).await?;
        if !self.ctx.publication_repo().delete(id).await? {
            return Err(ServiceError::publication_not_found(id));
        }

        info!(
            publication_id = %id,
            comments_removed = comments,
            reactions_removed = reactions,
            "Publication deleted"
        );
        Ok(())
    }

    #[instrument(skip(self, content))]
    async fn add_comment(
        &self,
        publication_id: Snowflake,
        author: &str,
        content: &str,
    ) -> ServiceResult<()> {
        validate_content(content, COMMENT_MAX_LENGTH)?;
        self.ensure_publication(publication_id).await?;

        let comment = Comment::new(
            self.ctx.generate_id(),
            publication_id,
            author.to_string(),
            content.to_string(),
        );
        self.ctx.comment_repo().create(&comment).await?;

        info!(
            comment_id = %comment.id,
            publication_id = %publication_id,
            author = %author,
            "Comment added"
        );
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_comment_by_id(&self, id: Snowflake) -> ServiceResult<Comment> {
        self.ctx
            .comment_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::comment_not_found(id))
    }

    #[instrument(skip(self))]
    async fn search_comments(
        &self,
        publication_id: Snowflake,
        skip: i64,
        take: i64,
    ) -> ServiceResult<Page<Comment>> {
        self.ensure_publication(publication_id).await?;

        Ok(self
            .ctx
            .comment_repo()
            .find_by_publication(publication_id, skip, take)
            .await?)
    }

    #[instrument(skip(self))]
    async fn get_reactions(
        &self,
        publication_id: Snowflake,
        author: &str,
    ) -> ServiceResult<ReactionShort> {
        self.ensure_publication(publication_id).await?;
        self.reaction_summary(publication_id, Some(author)).await
    }

    #[instrument(skip(self))]
    async fn add_reaction(
        &self,
        publication_id: Snowflake,
        author: &str,
        reaction_type: ReactionType,
    ) -> ServiceResult<()> {
        self.ensure_publication(publication_id).await?;

        let reaction = Reaction::new(publication_id, author.to_string(), reaction_type);
        self.ctx.reaction_repo().upsert(&reaction).await?;

        info!(
            publication_id = %publication_id,
            author = %author,
            reaction = %reaction_type,
            "Reaction set"
        );
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_reaction(&self, publication_id: Snowflake, author: &str) -> ServiceResult<()> {
        self.ensure_publication(publication_id).await?;

        if self.ctx.reaction_repo().delete(publication_id, author).await? {
            info!(publication_id = %publication_id, author = %author, "Reaction removed");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_comment(&self, id: Snowflake) -> ServiceResult<()> {
        if !self.ctx.comment_repo().delete(id).await? {
            return Err(ServiceError::comment_not_found(id));
        }

        info!(comment_id = %id, "Comment deleted");
        Ok(())
    }
}
