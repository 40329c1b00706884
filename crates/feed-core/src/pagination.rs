//! Pagination primitives shared by every list operation

use serde::Serialize;

/// One page of a larger result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Size of the full matching set, not of this page
    pub total_count: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: i64) -> Self {
        Self { items, total_count }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Transform every item while keeping the total count
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
        }
    }

    /// Pagination headers for this page requested with `(skip, take)`
    pub fn headers(&self, skip: i64, take: i64) -> PageHeaders {
        PageHeaders::compute(skip, take, self.total_count)
    }
}

/// Values for the `X-Total-Count` / `X-Has-More` response headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHeaders {
    pub total_count: i64,
    pub has_more: bool,
}

impl PageHeaders {
    pub const TOTAL_COUNT: &'static str = "x-total-count";
    pub const HAS_MORE: &'static str = "x-has-more";

    /// `has_more` is true iff `skip + take < total_count`
    pub fn compute(skip: i64, take: i64, total_count: i64) -> Self {
        Self {
            total_count,
            has_more: skip.saturating_add(take) < total_count,
        }
    }
}
