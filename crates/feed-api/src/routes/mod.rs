//! Route definitions
//!
//! Feed routes live under `/newsfeed`; health routes are exported separately
//! so they bypass rate limiting.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{health, news_feed};
use crate::state::AppState;

/// Create the feed router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/newsfeed", news_feed_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// `:id` is a publication id everywhere except the singular `comment` GET/DELETE,
/// where it is a comment id
fn news_feed_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(news_feed::list_publications).post(news_feed::create_publication),
        )
        .route(
            "/:id",
            put(news_feed::update_publication).delete(news_feed::delete_publication),
        )
        .route(
            "/:id/reaction",
            post(news_feed::add_reaction).delete(news_feed::remove_reaction),
        )
        .route("/:id/comments", get(news_feed::list_comments))
        .route(
            "/:id/comment",
            get(news_feed::get_comment)
                .post(news_feed::add_comment)
                .delete(news_feed::delete_comment),
        )
}
