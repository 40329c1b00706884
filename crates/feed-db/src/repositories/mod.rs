//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in feed-core.

mod comment;
mod error;
mod publication;
mod reaction;

pub use comment::PgCommentRepository;
pub use publication::PgPublicationRepository;
pub use reaction::PgReactionRepository;
