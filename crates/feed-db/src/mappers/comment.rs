//! Comment model -> entity mapper

use feed_core::entities::Comment;
use feed_core::value_objects::Snowflake;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            publication_id: Snowflake::new(model.publication_id),
            author: model.author,
            content: model.content,
            created_at: model.created_at,
        }
    }
}
