//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake ids from the `:id` path segment.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use feed_core::Snowflake;

use crate::response::ApiError;

/// The single `:id` path parameter, parsed as a Snowflake
///
/// Depending on the route this is a publication id or a comment id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub Snowflake);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        raw.parse::<Snowflake>()
            .map(IdPath)
            .map_err(|e| ApiError::invalid_path(format!("Invalid id '{raw}': {e}")))
    }
}
