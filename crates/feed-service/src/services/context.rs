//! Service context - dependency container for services
//!
//! Holds the repositories, the id generator and the JWT service. Storage can
//! be PostgreSQL (with a pool for health checks) or the in-memory store.

use std::sync::Arc;

use feed_common::auth::JwtService;
use feed_common::StoreBackend;
use feed_core::traits::{CommentRepository, PublicationRepository, ReactionRepository};
use feed_core::{Snowflake, SnowflakeGenerator};
use feed_db::{
    check_connection, InMemoryFeedStore, PgCommentRepository, PgPool, PgPublicationRepository,
    PgReactionRepository,
};
use tracing::warn;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    backend: StoreBackend,
    pool: Option<PgPool>,

    // Repositories
    publication_repo: Arc<dyn PublicationRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,

    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Context backed by PostgreSQL repositories sharing `pool`
    pub fn postgres(
        pool: PgPool,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            backend: StoreBackend::Postgres,
            publication_repo: Arc::new(PgPublicationRepository::new(pool.clone())),
            comment_repo: Arc::new(PgCommentRepository::new(pool.clone())),
            reaction_repo: Arc::new(PgReactionRepository::new(pool.clone())),
            pool: Some(pool),
            jwt_service,
            snowflake_generator,
        }
    }

    /// Context backed by a fresh in-memory store
    pub fn in_memory(
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        let store = Arc::new(InMemoryFeedStore::new());
        Self {
            backend: StoreBackend::Memory,
            pool: None,
            publication_repo: store.clone(),
            comment_repo: store.clone(),
            reaction_repo: store,
            jwt_service,
            snowflake_generator,
        }
    }

    // === Storage ===

    pub fn backend(&self) -> StoreBackend {
        self.backend
    }

    /// Get the PostgreSQL connection pool, if storage is PostgreSQL
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Whether the storage backend can currently serve requests
    pub async fn storage_healthy(&self) -> bool {
        match &self.pool {
            Some(pool) => match check_connection(pool).await {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "Storage health check failed");
                    false
                }
            },
            None => true,
        }
    }

    // === Repositories ===

    pub fn publication_repo(&self) -> &dyn PublicationRepository {
        self.publication_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("backend", &self.backend)
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}
