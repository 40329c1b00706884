//! # feed-db
//!
//! Storage layer implementing the feed-core repository traits.
//!
//! ## Overview
//!
//! - PostgreSQL via SQLx: connection pool, `FromRow` models, model → entity
//!   mappers, repositories and runtime-loaded migrations
//! - [`InMemoryFeedStore`]: the same traits over an in-process `RwLock`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use feed_db::{create_pool, run_migrations, PgPublicationRepository};
//!
//! async fn example(config: &feed_common::DatabaseConfig) -> anyhow::Result<()> {
//!     let pool = create_pool(config).await?;
//!     run_migrations(&pool).await?;
//!     let publications = PgPublicationRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::InMemoryFeedStore;
pub use migrations::{run_migrations, run_migrations_from, MigrationError};
pub use pool::{check_connection, create_pool, PgPool};
pub use repositories::{PgCommentRepository, PgPublicationRepository, PgReactionRepository};
