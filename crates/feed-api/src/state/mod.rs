//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the injected news feed manager and the configuration.

use std::sync::Arc;

use feed_common::{AppConfig, JwtService};
use feed_service::{NewsFeedManager, NewsFeedService, ServiceContext};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing storage and identity dependencies
    service_context: Arc<ServiceContext>,
    /// Owner of all feed state; handlers only delegate to it
    news_feed: Arc<dyn NewsFeedManager>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState backed by [`NewsFeedService`]
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        let service_context = Arc::new(service_context);
        let news_feed = Arc::new(NewsFeedService::new(service_context.clone()));
        Self {
            service_context,
            news_feed,
            config: Arc::new(config),
        }
    }

    /// Create an AppState around a caller-supplied manager
    pub fn with_manager(
        service_context: ServiceContext,
        news_feed: Arc<dyn NewsFeedManager>,
        config: AppConfig,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            news_feed,
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the news feed manager
    pub fn news_feed(&self) -> &dyn NewsFeedManager {
        self.news_feed.as_ref()
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the JWT service from the service context
    pub fn jwt_service(&self) -> &JwtService {
        self.service_context.jwt_service()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("news_feed", &"dyn NewsFeedManager")
            .field("config", &"AppConfig")
            .finish()
    }
}
