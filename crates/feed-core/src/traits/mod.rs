//! Repository traits (ports)

mod repositories;

pub use repositories::{CommentRepository, PublicationRepository, ReactionRepository, RepoResult};
