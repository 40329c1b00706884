//! Reaction model -> entity mapper

use feed_core::entities::{Reaction, ReactionType};
use feed_core::error::DomainError;
use feed_core::value_objects::Snowflake;

use crate::models::{ReactionCountModel, ReactionModel};

impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        Ok(Reaction {
            publication_id: Snowflake::new(model.publication_id),
            author: model.author,
            reaction_type: model.reaction_type.parse()?,
            created_at: model.created_at,
        })
    }
}

impl TryFrom<ReactionCountModel> for (ReactionType, i64) {
    type Error = DomainError;

    fn try_from(model: ReactionCountModel) -> Result<Self, Self::Error> {
        Ok((model.reaction_type.parse()?, model.count))
    }
}
