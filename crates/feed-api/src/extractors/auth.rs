//! Authentication extractor
//!
//! Extracts and validates JWT bearer tokens from the Authorization header.
//! The token subject is used as the author identity.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from a JWT token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// Opaque author identity (the token subject)
    pub author: String,
}

impl AuthUser {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
        }
    }
}

/// `Ok(None)` when no Authorization header is present
async fn authenticate<S>(parts: &mut Parts, state: &S) -> Result<Option<AuthUser>, ApiError>
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    let bearer = match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
    {
        Ok(TypedHeader(Authorization(bearer))) => bearer,
        Err(rejection) if rejection.is_missing() => return Ok(None),
        Err(_) => return Err(ApiError::InvalidAuthFormat),
    };

    let app_state = AppState::from_ref(state);
    let claims = app_state
        .jwt_service()
        .validate_access_token(bearer.token())
        .map_err(|e| {
            tracing::warn!(error = %e, "Invalid access token");
            ApiError::from(e)
        })?;

    Ok(Some(AuthUser::new(claims.user_id())))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        authenticate(parts, state).await?.ok_or(ApiError::MissingAuth)
    }
}

/// Optional authenticated caller
///
/// Returns None if no authorization header is present,
/// or an error if the header or token is invalid.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    /// Author identity of the caller, if any
    pub fn author(&self) -> Option<&str> {
        self.0.as_ref().map(|user| user.author.as_str())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuthUser(authenticate(parts, state).await?))
    }
}
