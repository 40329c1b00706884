//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::Comment;
use feed_core::error::DomainError;
use feed_core::pagination::Page;
use feed_core::traits::{CommentRepository, RepoResult};
use feed_core::value_objects::Snowflake;

use crate::models::CommentModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, publication_id, author, content, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_publication(
        &self,
        publication_id: Snowflake,
        skip: i64,
        take: i64,
    ) -> RepoResult<Page<Comment>> {
        let total_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE publication_id = $1")
                .bind(publication_id.into_inner())
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, publication_id, author, content, created_at
            FROM comments
            WHERE publication_id = $1
            ORDER BY created_at ASC, id ASC
            OFFSET $2
            LIMIT $3
            "#,
        )
        .bind(publication_id.into_inner())
        .bind(skip.max(0))
        .bind(take.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(Comment::from).collect(),
            total_count,
        ))
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, publication_id, author, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.id.into_inner())
        .bind(comment.publication_id.into_inner())
        .bind(&comment.author)
        .bind(&comment.content)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || DomainError::PublicationNotFound(comment.publication_id))
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_by_publication(&self, publication_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM comments WHERE publication_id = $1")
            .bind(publication_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
