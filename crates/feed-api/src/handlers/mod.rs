//! Route handlers
//!
//! Handlers are stateless: they validate input, call the injected
//! news feed manager and shape the HTTP response.

pub mod health;
pub mod news_feed;
