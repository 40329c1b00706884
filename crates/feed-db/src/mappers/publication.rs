//! Publication model -> entity mapper

use feed_core::entities::Publication;
use feed_core::value_objects::Snowflake;

use crate::models::PublicationModel;

impl From<PublicationModel> for Publication {
    fn from(model: PublicationModel) -> Self {
        Publication {
            id: Snowflake::new(model.id),
            author: model.author,
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
