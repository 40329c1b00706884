//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::{Reaction, ReactionType};
use feed_core::error::DomainError;
use feed_core::traits::{ReactionRepository, RepoResult};
use feed_core::value_objects::Snowflake;

use crate::models::{ReactionCountModel, ReactionModel};

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self, reaction), fields(publication_id = %reaction.publication_id, reaction_type = %reaction.reaction_type))]
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<()> {
        // One row per (publication, author); a second reaction replaces the type
        sqlx::query(
            r#"
            INSERT INTO reactions (publication_id, author, reaction_type, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (publication_id, author)
            DO UPDATE SET reaction_type = EXCLUDED.reaction_type, created_at = EXCLUDED.created_at
            "#,
        )
        .bind(reaction.publication_id.into_inner())
        .bind(&reaction.author)
        .bind(reaction.reaction_type.as_str())
        .bind(reaction.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || DomainError::PublicationNotFound(reaction.publication_id))
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, publication_id: Snowflake, author: &str) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM reactions WHERE publication_id = $1 AND author = $2")
            .bind(publication_id.into_inner())
            .bind(author)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn find(&self, publication_id: Snowflake, author: &str) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT publication_id, author, reaction_type, created_at
            FROM reactions
            WHERE publication_id = $1 AND author = $2
            "#,
        )
        .bind(publication_id.into_inner())
        .bind(author)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn count_by_type(&self, publication_id: Snowflake) -> RepoResult<Vec<(ReactionType, i64)>> {
        let results = sqlx::query_as::<_, ReactionCountModel>(
            r#"
            SELECT reaction_type, COUNT(*) AS count
            FROM reactions
            WHERE publication_id = $1
            GROUP BY reaction_type
            "#,
        )
        .bind(publication_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(<(ReactionType, i64)>::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn delete_by_publication(&self, publication_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM reactions WHERE publication_id = $1")
            .bind(publication_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
