//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod publication;
mod reaction;

pub use comment::CommentModel;
pub use publication::PublicationModel;
pub use reaction::{ReactionCountModel, ReactionModel};
