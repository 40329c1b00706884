//! Domain entities - core business objects

mod comment;
mod publication;
mod reaction;

pub use comment::Comment;
pub use publication::Publication;
pub use reaction::{Reaction, ReactionShort, ReactionType, UserReaction};
