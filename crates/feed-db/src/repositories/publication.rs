//! PostgreSQL implementation of PublicationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::Publication;
use feed_core::pagination::Page;
use feed_core::traits::{PublicationRepository, RepoResult};
use feed_core::value_objects::Snowflake;

use crate::models::PublicationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PublicationRepository
#[derive(Clone)]
pub struct PgPublicationRepository {
    pool: PgPool,
}

impl PgPublicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PublicationRepository for PgPublicationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Publication>> {
        let result = sqlx::query_as::<_, PublicationModel>(
            r#"
            SELECT id, author, content, created_at, updated_at
            FROM publications
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Publication::from))
    }

    #[instrument(skip(self))]
    async fn find_many(&self, skip: i64, take: i64) -> RepoResult<Page<Publication>> {
        let total_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM publications")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, PublicationModel>(
            r#"
            SELECT id, author, content, created_at, updated_at
            FROM publications
            ORDER BY created_at DESC, id DESC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(skip.max(0))
        .bind(take.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(Publication::from).collect(),
            total_count,
        ))
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: Snowflake) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM publications WHERE id = $1)")
            .bind(id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, publication), fields(publication_id = %publication.id))]
    async fn create(&self, publication: &Publication) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO publications (id, author, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(publication.id.into_inner())
        .bind(&publication.author)
        .bind(&publication.content)
        .bind(publication.created_at)
        .bind(publication.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, publication), fields(publication_id = %publication.id))]
    async fn update(&self, publication: &Publication) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE publications
            SET content = $2, updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(publication.id.into_inner())
        .bind(&publication.content)
        .bind(publication.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM publications WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
