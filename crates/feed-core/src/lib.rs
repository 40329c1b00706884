//! # feed-core
//!
//! Domain layer containing entities, value objects, pagination primitives and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod pagination;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Comment, Publication, Reaction, ReactionShort, ReactionType, UserReaction};
pub use error::DomainError;
pub use pagination::{Page, PageHeaders};
pub use traits::{CommentRepository, PublicationRepository, ReactionRepository, RepoResult};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
