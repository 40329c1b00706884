//! News feed handlers
//!
//! Publications, their comments and reactions under `/newsfeed`.

use axum::{extract::State, http::StatusCode, Json};
use feed_service::dto::{
    AddCommentRequest, AddReactionRequest, CommentResponse, CreatePublicationRequest,
    NewsFeedPublicationResponse, ReactionShortResponse, UpdatePublicationRequest,
};

use crate::extractors::{
    AuthUser, CommentPagination, IdPath, OptionalAuthUser, PublicationPagination, ValidatedJson,
};
use crate::response::{ApiResult, Created, NoContent, Paginated};
use crate::state::AppState;

/// List the feed, newest first
///
/// GET /newsfeed?skip=&take=
pub async fn list_publications(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    page: PublicationPagination,
) -> ApiResult<Paginated<NewsFeedPublicationResponse>> {
    let feed = state
        .news_feed()
        .find_many(page.skip, page.take, viewer.author())
        .await?;

    Ok(Paginated::new(
        feed.map(NewsFeedPublicationResponse::from),
        page.skip,
        page.take,
    ))
}

/// Create a publication
///
/// POST /newsfeed
pub async fn create_publication(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreatePublicationRequest>,
) -> ApiResult<Created<Json<NewsFeedPublicationResponse>>> {
    let created = state.news_feed().create(&req.content, &auth.author).await?;
    Ok(Created(Json(created.into())))
}

/// Replace a publication's content
///
/// PUT /newsfeed/{id}
pub async fn update_publication(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdatePublicationRequest>,
) -> ApiResult<NoContent> {
    state.news_feed().update(id, &req.content).await?;
    Ok(NoContent)
}

/// Delete a publication with its comments and reactions
///
/// DELETE /newsfeed/{id}
pub async fn delete_publication(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<StatusCode> {
    state.news_feed().delete(id).await?;
    Ok(StatusCode::OK)
}

/// Add or replace the caller's reaction
///
/// POST /newsfeed/{id}/reaction
pub async fn add_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(publication_id): IdPath,
    ValidatedJson(req): ValidatedJson<AddReactionRequest>,
) -> ApiResult<Json<ReactionShortResponse>> {
    let feed = state.news_feed();
    feed.add_reaction(publication_id, &auth.author, req.reaction)
        .await?;
    let reactions = feed.get_reactions(publication_id, &auth.author).await?;
    Ok(Json(reactions.into()))
}

/// Remove the caller's reaction
///
/// DELETE /newsfeed/{id}/reaction
pub async fn remove_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(publication_id): IdPath,
) -> ApiResult<Json<ReactionShortResponse>> {
    let feed = state.news_feed();
    feed.remove_reaction(publication_id, &auth.author).await?;
    let reactions = feed.get_reactions(publication_id, &auth.author).await?;
    Ok(Json(reactions.into()))
}

/// Comments of a publication, oldest first
///
/// GET /newsfeed/{id}/comments?skip=&take=
pub async fn list_comments(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(publication_id): IdPath,
    page: CommentPagination,
) -> ApiResult<Paginated<CommentResponse>> {
    let comments = state
        .news_feed()
        .search_comments(publication_id, page.skip, page.take)
        .await?;

    Ok(Paginated::new(
        comments.map(CommentResponse::from),
        page.skip,
        page.take,
    ))
}

/// GET /newsfeed/{id}/comment, where `id` is a comment id
pub async fn get_comment(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(comment_id): IdPath,
) -> ApiResult<Json<CommentResponse>> {
    let comment = state.news_feed().get_comment_by_id(comment_id).await?;
    Ok(Json(comment.into()))
}

/// POST /newsfeed/{id}/comment, where `id` is a publication id
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(publication_id): IdPath,
    ValidatedJson(req): ValidatedJson<AddCommentRequest>,
) -> ApiResult<StatusCode> {
    state
        .news_feed()
        .add_comment(publication_id, &auth.author, &req.content)
        .await?;
    Ok(StatusCode::OK)
}

/// DELETE /newsfeed/{id}/comment, where `id` is a comment id
pub async fn delete_comment(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(comment_id): IdPath,
) -> ApiResult<StatusCode> {
    state.news_feed().delete_comment(comment_id).await?;
    Ok(StatusCode::OK)
}
