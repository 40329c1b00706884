//! Pagination extractor
//!
//! Extracts offset pagination (`skip`, `take`) from query strings. Each
//! resource has its own limits; values outside them are rejected, not clamped.

use std::marker::PhantomData;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Per-resource bounds for `take`
pub trait PageLimits: Send + Sync + 'static {
    const MIN_TAKE: i64;
    const MAX_TAKE: i64;
    const DEFAULT_TAKE: i64;
}

/// Feed pages: 1..=50, default 20
#[derive(Debug, Clone, Copy)]
pub struct PublicationLimits;

impl PageLimits for PublicationLimits {
    const MIN_TAKE: i64 = 1;
    const MAX_TAKE: i64 = 50;
    const DEFAULT_TAKE: i64 = 20;
}

/// Comment pages: 0..=100, default 10
#[derive(Debug, Clone, Copy)]
pub struct CommentLimits;

impl PageLimits for CommentLimits {
    const MIN_TAKE: i64 = 0;
    const MAX_TAKE: i64 = 100;
    const DEFAULT_TAKE: i64 = 10;
}

/// Raw pagination query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    /// Number of items to skip
    #[serde(default)]
    pub skip: Option<i64>,
    /// Maximum number of items to return
    #[serde(default)]
    pub take: Option<i64>,
}

/// Validated pagination parameters
#[derive(Debug, Clone, Copy)]
pub struct Pagination<L> {
    pub skip: i64,
    pub take: i64,
    _limits: PhantomData<fn() -> L>,
}

pub type PublicationPagination = Pagination<PublicationLimits>;
pub type CommentPagination = Pagination<CommentLimits>;

impl<L: PageLimits> Default for Pagination<L> {
    fn default() -> Self {
        Self {
            skip: 0,
            take: L::DEFAULT_TAKE,
            _limits: PhantomData,
        }
    }
}

impl<L: PageLimits> TryFrom<PaginationParams> for Pagination<L> {
    type Error = ApiError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        let skip = params.skip.unwrap_or(0);
        if skip < 0 {
            return Err(ApiError::invalid_query(format!(
                "'skip' must be >= 0, got {skip}"
            )));
        }

        let take = params.take.unwrap_or(L::DEFAULT_TAKE);
        if !(L::MIN_TAKE..=L::MAX_TAKE).contains(&take) {
            return Err(ApiError::invalid_query(format!(
                "'take' must be between {} and {}, got {take}",
                L::MIN_TAKE,
                L::MAX_TAKE
            )));
        }

        Ok(Pagination {
            skip,
            take,
            _limits: PhantomData,
        })
    }
}

#[async_trait]
impl<S, L> FromRequestParts<S> for Pagination<L>
where
    S: Send + Sync,
    L: PageLimits,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Pagination::try_from(params)
    }
}
