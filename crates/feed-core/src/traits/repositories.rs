//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer declares what storage it needs; `feed-db` provides the
//! PostgreSQL and in-memory implementations.

use async_trait::async_trait;

use crate::entities::{Comment, Publication, Reaction, ReactionType};
use crate::error::DomainError;
use crate::pagination::Page;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Publication Repository
// ============================================================================

#[async_trait]
pub trait PublicationRepository: Send + Sync {
    /// Find publication by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Publication>>;

    /// List publications newest first
    async fn find_many(&self, skip: i64, take: i64) -> RepoResult<Page<Publication>>;

    /// Check whether a publication exists
    async fn exists(&self, id: Snowflake) -> RepoResult<bool>;

    /// Insert a new publication
    async fn create(&self, publication: &Publication) -> RepoResult<()>;

    /// Persist new content; returns false if the publication does not exist
    async fn update(&self, publication: &Publication) -> RepoResult<bool>;

    /// Delete a publication; returns false if it did not exist
    async fn delete(&self, id: Snowflake) -> RepoResult<bool>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// List comments of a publication oldest first
    async fn find_by_publication(
        &self,
        publication_id: Snowflake,
        skip: i64,
        take: i64,
    ) -> RepoResult<Page<Comment>>;

    /// Insert a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment; returns false if it did not exist
    async fn delete(&self, id: Snowflake) -> RepoResult<bool>;

    /// Delete every comment of a publication, returning how many were removed
    async fn delete_by_publication(&self, publication_id: Snowflake) -> RepoResult<u64>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Insert or replace the reaction of `reaction.author` on the publication
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Remove an author's reaction; returns false if there was none
    async fn delete(&self, publication_id: Snowflake, author: &str) -> RepoResult<bool>;

    /// Find an author's reaction on a publication
    async fn find(&self, publication_id: Snowflake, author: &str) -> RepoResult<Option<Reaction>>;

    /// Count reactions on a publication grouped by type
    async fn count_by_type(&self, publication_id: Snowflake) -> RepoResult<Vec<(ReactionType, i64)>>;

    /// Delete every reaction of a publication, returning how many were removed
    async fn delete_by_publication(&self, publication_id: Snowflake) -> RepoResult<u64>;
}
