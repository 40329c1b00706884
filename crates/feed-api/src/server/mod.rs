//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::sync::Arc;

use axum::Router;
use feed_common::{AppConfig, AppError, ConfigError, JwtService, StoreBackend};
use feed_core::SnowflakeGenerator;
use feed_db::{create_pool, run_migrations, run_migrations_from};
use feed_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        &config.http,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes(), &config.http);

    Ok(api.merge(health).with_state(state))
}

/// Initialize storage and identity dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let jwt_service = Arc::new(JwtService::from_config(&config.jwt));
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    let service_context = match config.store {
        StoreBackend::Postgres => {
            let db_config = config
                .database
                .as_ref()
                .ok_or(AppError::Config(ConfigError::MissingVar("DATABASE_URL")))?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(db_config)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            if db_config.run_migrations {
                match db_config.migrations_dir.as_deref() {
                    Some(dir) => run_migrations_from(&pool, dir).await,
                    None => run_migrations(&pool).await,
                }
                .map_err(|e| AppError::Database(e.to_string()))?;
            }

            ServiceContext::postgres(pool, jwt_service, snowflake_generator)
        }
        StoreBackend::Memory => {
            info!("Using in-memory feed store");
            ServiceContext::in_memory(jwt_service, snowflake_generator)
        }
    };

    Ok(AppState::new(service_context, config))
}

/// Serve `app` on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::internal(anyhow::Error::new(e)))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(anyhow::Error::new(e).context("server error")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        AppError::internal(anyhow::Error::new(e).context(format!("failed to bind to {addr}")))
    })?;

    run_server(app, listener).await
}
