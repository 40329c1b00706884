//! API Integration Tests
//!
//! Each test spawns the gateway on an ephemeral port with a fresh
//! in-memory store. No external services are required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;

use async_trait::async_trait;
use feed_core::{Comment, Page, ReactionShort, ReactionType, Snowflake};
use feed_service::{NewsFeedManager, NewsFeedPublication, ServiceError, ServiceResult};
use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, header, TestServer,
};
use reqwest::StatusCode;

async fn create_publication(server: &TestServer, token: &str, content: &str) -> FeedItem {
    let response = server
        .post_auth("/newsfeed", token, &ContentRequest::new(content))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn add_comment(server: &TestServer, token: &str, publication_id: &str, content: &str) {
    let response = server
        .post_auth(
            &format!("/newsfeed/{publication_id}/comment"),
            token,
            &ContentRequest::new(content),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["storage"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/newsfeed").await.unwrap();
    assert!(!header(&response, "x-request-id").is_empty());
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_create_without_token_is_unauthorized() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/newsfeed", &ContentRequest::new("hello"))
        .await
        .unwrap();

    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_comments_require_token() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/newsfeed/42/comments").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let forged = feed_common::JwtService::new("some-other-secret", 900)
        .issue_access_token("mallory")
        .unwrap();

    let response = server
        .post_auth("/newsfeed", &forged, &ContentRequest::new("hello"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Publication Tests
// ============================================================================

#[tokio::test]
async fn test_create_then_list() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("alice");

    let created = create_publication(&server, &token, "Hello feed").await;
    assert_eq!(created.author, "alice");
    assert_eq!(created.content, "Hello feed");
    assert!(created.updated_at.is_none());

    let response = server.get_auth("/newsfeed?skip=0", &token).await.unwrap();
    assert_eq!(header(&response, "x-total-count"), "1");
    assert_eq!(header(&response, "x-has-more"), "false");

    let feed: Vec<FeedItem> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.iter().any(|item| item.id == created.id && item.author == "alice"));
}

#[tokio::test]
async fn test_feed_is_newest_first_with_has_more() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("alice");

    for content in ["one", "two", "three"] {
        create_publication(&server, &token, content).await;
    }

    let response = server.get("/newsfeed?skip=0&take=2").await.unwrap();
    assert_eq!(header(&response, "x-total-count"), "3");
    assert_eq!(header(&response, "x-has-more"), "true");
    let feed: Vec<FeedItem> = assert_json(response, StatusCode::OK).await.unwrap();
    let contents: Vec<_> = feed.iter().map(|item| item.content.as_str()).collect();
    assert_eq!(contents, ["three", "two"]);

    let response = server.get("/newsfeed?skip=2&take=2").await.unwrap();
    assert_eq!(header(&response, "x-has-more"), "false");
    let feed: Vec<FeedItem> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].content, "one");
}

#[tokio::test]
async fn test_feed_take_bounds() {
    let server = TestServer::start().await.unwrap();

    for query in ["take=0", "take=51", "skip=-1", "take=abc"] {
        let response = server.get(&format!("/newsfeed?{query}")).await.unwrap();
        let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(code, "INVALID_QUERY_PARAMETER", "{query}");
    }

    for query in ["take=1", "take=50"] {
        let response = server.get(&format!("/newsfeed?{query}")).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }
}

#[tokio::test]
async fn test_update_publication() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("alice");
    let created = create_publication(&server, &token, "draft").await;

    let response = server
        .put_auth(
            &format!("/newsfeed/{}", created.id),
            &token,
            &ContentRequest::new("final"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let feed: Vec<FeedItem> = assert_json(server.get("/newsfeed").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(feed[0].content, "final");
    assert!(feed[0].updated_at.is_some());
}

#[tokio::test]
async fn test_update_unknown_publication() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("alice");

    let response = server
        .put_auth("/newsfeed/987654321", &token, &ContentRequest::new("x"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_PUBLICATION");
}

#[tokio::test]
async fn test_content_validation() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("alice");

    let response = server
        .post_auth("/newsfeed", &token, &ContentRequest::new(""))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");

    let response = server
        .post_auth("/newsfeed", &token, &ContentRequest::new("a".repeat(5001)))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post_auth("/newsfeed", &token, &ContentRequest::new("   "))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "BLANK_CONTENT");

    let response = server
        .post_auth("/newsfeed", &token, &ContentRequest::new("a".repeat(5000)))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_delete_publication() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("alice");
    let created = create_publication(&server, &token, "short lived").await;

    let response = server
        .delete_auth(&format!("/newsfeed/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    let response = server.get("/newsfeed").await.unwrap();
    assert_eq!(header(&response, "x-total-count"), "0");

    // Second delete of the same id
    let response = server
        .delete_auth(&format!("/newsfeed/{}", created.id), &token)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_PUBLICATION");
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("alice");

    for path in ["/newsfeed/not-a-number", "/newsfeed/-5", "/newsfeed/0"] {
        let response = server.delete_auth(path, &token).await.unwrap();
        let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(code, "INVALID_PATH_PARAMETER", "{path}");
    }
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_is_replaced() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("bob");
    let created = create_publication(&server, &token, "react to me").await;
    let path = format!("/newsfeed/{}/reaction", created.id);

    let response = server
        .post_auth(&path, &token, &ReactionRequest::new("like"))
        .await
        .unwrap();
    let summary: ReactionSummary = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(summary.reactions.get("like"), Some(&1));

    let response = server
        .post_auth(&path, &token, &ReactionRequest::new("sad"))
        .await
        .unwrap();
    let summary: ReactionSummary = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(summary.reactions.len(), 1);
    assert_eq!(summary.reactions.get("sad"), Some(&1));
    assert_eq!(summary.user.unwrap().reaction, "sad");
}

#[tokio::test]
async fn test_remove_reaction() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("bob");
    let created = create_publication(&server, &token, "react to me").await;
    let path = format!("/newsfeed/{}/reaction", created.id);

    server
        .post_auth(&path, &token, &ReactionRequest::new("love"))
        .await
        .unwrap();

    let response = server.delete_auth(&path, &token).await.unwrap();
    let summary: ReactionSummary = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(summary.reactions.is_empty());
    assert!(summary.user.is_none());

    // Removing again is a no-op
    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_unknown_reaction_type() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("bob");
    let created = create_publication(&server, &token, "react to me").await;

    let response = server
        .post_auth(
            &format!("/newsfeed/{}/reaction", created.id),
            &token,
            &ReactionRequest::new("meh"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_reaction_on_unknown_publication() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("bob");

    let response = server
        .post_auth("/newsfeed/123456/reaction", &token, &ReactionRequest::new("like"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_feed_reactions_are_scoped_to_viewer() {
    let server = TestServer::start().await.unwrap();
    let alice = server.token("alice");
    let bob = server.token("bob");
    let created = create_publication(&server, &alice, "scoped").await;

    server
        .post_auth(
            &format!("/newsfeed/{}/reaction", created.id),
            &alice,
            &ReactionRequest::new("wow"),
        )
        .await
        .unwrap();

    let feed: Vec<FeedItem> =
        assert_json(server.get_auth("/newsfeed", &alice).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert_eq!(feed[0].reactions.user.as_ref().unwrap().reaction, "wow");

    for response in [
        server.get_auth("/newsfeed", &bob).await.unwrap(),
        server.get("/newsfeed").await.unwrap(),
    ] {
        let feed: Vec<FeedItem> = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(feed[0].reactions.reactions.get("wow"), Some(&1));
        assert!(feed[0].reactions.user.is_none());
    }
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_add_then_search_comments() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("carol");
    let created = create_publication(&server, &token, "discuss").await;

    add_comment(&server, &token, &created.id, "x").await;

    let response = server
        .get_auth(&format!("/newsfeed/{}/comments?skip=0&take=10", created.id), &token)
        .await
        .unwrap();
    assert_eq!(header(&response, "x-total-count"), "1");
    assert_eq!(header(&response, "x-has-more"), "false");

    let comments: Vec<CommentBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(comments
        .iter()
        .any(|c| c.content == "x" && c.author == "carol" && c.publication_id == created.id));
}

#[tokio::test]
async fn test_comment_take_bounds() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("carol");
    let created = create_publication(&server, &token, "discuss").await;
    add_comment(&server, &token, &created.id, "x").await;

    let path = format!("/newsfeed/{}/comments", created.id);

    let response = server.get_auth(&format!("{path}?take=0"), &token).await.unwrap();
    assert_eq!(header(&response, "x-has-more"), "true");
    let comments: Vec<CommentBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(comments.is_empty());

    let response = server.get_auth(&format!("{path}?take=100"), &token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth(&format!("{path}?take=101"), &token).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_QUERY_PARAMETER");
}

#[tokio::test]
async fn test_comments_oldest_first_and_paged() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("carol");
    let created = create_publication(&server, &token, "discuss").await;

    for content in ["first", "second", "third"] {
        add_comment(&server, &token, &created.id, content).await;
    }

    let response = server
        .get_auth(&format!("/newsfeed/{}/comments?skip=1&take=1", created.id), &token)
        .await
        .unwrap();
    assert_eq!(header(&response, "x-total-count"), "3");
    assert_eq!(header(&response, "x-has-more"), "true");
    let comments: Vec<CommentBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].content, "second");
}

#[tokio::test]
async fn test_feed_embeds_top_comments() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("carol");
    let created = create_publication(&server, &token, "popular").await;

    for i in 0..4 {
        add_comment(&server, &token, &created.id, &format!("comment {i}")).await;
    }

    let feed: Vec<FeedItem> = assert_json(server.get("/newsfeed").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(feed[0].comments.total_count, 4);
    assert_eq!(feed[0].comments.top_comments.len(), 3);
    assert_eq!(feed[0].comments.top_comments[0].content, "comment 0");
}

#[tokio::test]
async fn test_get_and_delete_comment() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("carol");
    let created = create_publication(&server, &token, "discuss").await;
    add_comment(&server, &token, &created.id, "to be removed").await;

    let comments: Vec<CommentBody> = assert_json(
        server
            .get_auth(&format!("/newsfeed/{}/comments", created.id), &token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let comment_path = format!("/newsfeed/{}/comment", comments[0].id);

    let response = server.get_auth(&comment_path, &token).await.unwrap();
    let fetched: CommentBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.content, "to be removed");

    let response = server.delete_auth(&comment_path, &token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth(&comment_path, &token).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_COMMENT");

    let response = server.delete_auth(&comment_path, &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_comment_on_unknown_publication() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("carol");

    let response = server
        .post_auth("/newsfeed/123456/comment", &token, &ContentRequest::new("hi"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_PUBLICATION");

    let response = server
        .get_auth("/newsfeed/123456/comments", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_comment_too_long() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("carol");
    let created = create_publication(&server, &token, "discuss").await;

    let response = server
        .post_auth(
            &format!("/newsfeed/{}/comment", created.id),
            &token,
            &ContentRequest::new("c".repeat(1001)),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
    assert!(body.error.details.is_some());
}

#[tokio::test]
async fn test_delete_publication_removes_comments() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("carol");
    let created = create_publication(&server, &token, "discuss").await;
    add_comment(&server, &token, &created.id, "orphan soon").await;

    let comments: Vec<CommentBody> = assert_json(
        server
            .get_auth(&format!("/newsfeed/{}/comments", created.id), &token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    server
        .delete_auth(&format!("/newsfeed/{}", created.id), &token)
        .await
        .unwrap();

    let response = server
        .get_auth(&format!("/newsfeed/{}/comment", comments[0].id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Downstream Failure Tests
// ============================================================================

/// Manager whose storage is unreachable
struct UnavailableManager;

fn unavailable<T>() -> ServiceResult<T> {
    Err(ServiceError::internal("storage unavailable"))
}

#[async_trait]
impl NewsFeedManager for UnavailableManager {
    async fn find_many(
        &self,
        _skip: i64,
        _take: i64,
        _viewer: Option<&str>,
    ) -> ServiceResult<Page<NewsFeedPublication>> {
        unavailable()
    }

    async fn create(&self, _content: &str, _author: &str) -> ServiceResult<NewsFeedPublication> {
        unavailable()
    }

    async fn update(&self, _id: Snowflake, _content: &str) -> ServiceResult<()> {
        unavailable()
    }

    async fn delete(&self, _id: Snowflake) -> ServiceResult<()> {
        unavailable()
    }

    async fn add_comment(
        &self,
        _publication_id: Snowflake,
        _author: &str,
        _content: &str,
    ) -> ServiceResult<()> {
        unavailable()
    }

    async fn get_comment_by_id(&self, _id: Snowflake) -> ServiceResult<Comment> {
        unavailable()
    }

    async fn search_comments(
        &self,
        _publication_id: Snowflake,
        _skip: i64,
        _take: i64,
    ) -> ServiceResult<Page<Comment>> {
        unavailable()
    }

    async fn get_reactions(
        &self,
        _publication_id: Snowflake,
        _author: &str,
    ) -> ServiceResult<ReactionShort> {
        unavailable()
    }

    async fn add_reaction(
        &self,
        _publication_id: Snowflake,
        _author: &str,
        _reaction_type: ReactionType,
    ) -> ServiceResult<()> {
        unavailable()
    }

    async fn remove_reaction(&self, _publication_id: Snowflake, _author: &str) -> ServiceResult<()> {
        unavailable()
    }

    async fn delete_comment(&self, _id: Snowflake) -> ServiceResult<()> {
        unavailable()
    }
}

#[tokio::test]
async fn test_downstream_failure_is_internal_error() {
    let server = TestServer::start_with_manager(Arc::new(UnavailableManager))
        .await
        .unwrap();

    let response = server.get("/newsfeed").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.error.code, "INTERNAL_ERROR");
    assert_eq!(body.error.message, "Internal server error");

    let token = server.token("dave");
    let response = server
        .post_auth("/newsfeed", &token, &ContentRequest::new("hello"))
        .await
        .unwrap();
    assert_status(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
}
