//! Schema migrations
//!
//! SQL files live in the crate's `migrations/` directory and are loaded at
//! runtime, so no database is needed at compile time.

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

/// Source-tree location of the `*.sql` migrations, baked in at compile time.
///
/// Binaries deployed elsewhere should pass their own directory to
/// [`run_migrations_from`].
pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Migration failures
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Failed to load migrations from {dir}: {source}")]
    Load {
        dir: String,
        #[source]
        source: MigrateError,
    },

    #[error("Failed to apply migrations: {0}")]
    Apply(#[source] MigrateError),
}

/// Apply the migrations from [`MIGRATIONS_DIR`]
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrationError> {
    run_migrations_from(pool, Path::new(MIGRATIONS_DIR)).await
}

/// Apply every pending migration found in `dir`
pub async fn run_migrations_from(pool: &PgPool, dir: &Path) -> Result<(), MigrationError> {
    let migrator = Migrator::new(dir).await.map_err(|source| MigrationError::Load {
        dir: dir.display().to_string(),
        source,
    })?;

    migrator.run(pool).await.map_err(MigrationError::Apply)?;

    info!(count = migrator.iter().count(), "Database migrations applied");
    Ok(())
}
