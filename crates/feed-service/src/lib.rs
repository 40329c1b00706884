//! # feed-service
//!
//! Application layer: the news feed manager contract, its implementation, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    NewsFeedManager, NewsFeedPublication, NewsFeedService, ServiceContext, ServiceError,
    ServiceResult,
};
