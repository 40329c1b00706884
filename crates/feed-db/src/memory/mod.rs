//! In-process storage backend
//!
//! `InMemoryFeedStore` implements every repository trait over a single
//! `parking_lot::RwLock`, so each call is atomic with respect to the others.
//! Used for `FEED_STORE=memory` and in tests.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::instrument;

use feed_core::entities::{Comment, Publication, Reaction, ReactionType};
use feed_core::error::DomainError;
use feed_core::pagination::Page;
use feed_core::traits::{CommentRepository, PublicationRepository, ReactionRepository, RepoResult};
use feed_core::value_objects::Snowflake;

#[derive(Debug, Default)]
struct FeedState {
    publications: BTreeMap<Snowflake, Publication>,
    comments: BTreeMap<Snowflake, Comment>,
    reactions: HashMap<(Snowflake, String), Reaction>,
}

/// Thread-safe in-memory store for publications, comments and reactions
#[derive(Debug, Default)]
pub struct InMemoryFeedStore {
    state: RwLock<FeedState>,
}

impl InMemoryFeedStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn paginate<T: Clone>(items: &[T], skip: i64, take: i64) -> Vec<T> {
    let skip = usize::try_from(skip).unwrap_or(0);
    let take = usize::try_from(take).unwrap_or(0);
    items.iter().skip(skip).take(take).cloned().collect()
}

#[async_trait]
impl PublicationRepository for InMemoryFeedStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Publication>> {
        Ok(self.state.read().publications.get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_many(&self, skip: i64, take: i64) -> RepoResult<Page<Publication>> {
        let state = self.state.read();

        let mut all: Vec<Publication> = state.publications.values().cloned().collect();
        all.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        Ok(Page::new(paginate(&all, skip, take), all.len() as i64))
    }

    async fn exists(&self, id: Snowflake) -> RepoResult<bool> {
        Ok(self.state.read().publications.contains_key(&id))
    }

    async fn create(&self, publication: &Publication) -> RepoResult<()> {
        let mut state = self.state.write();
        if state.publications.contains_key(&publication.id) {
            return Err(DomainError::DatabaseError(format!(
                "duplicate publication id {}",
                publication.id
            )));
        }
        state.publications.insert(publication.id, publication.clone());
        Ok(())
    }

    async fn update(&self, publication: &Publication) -> RepoResult<bool> {
        let mut state = self.state.write();
        match state.publications.get_mut(&publication.id) {
            Some(stored) => {
                stored.content.clone_from(&publication.content);
                stored.updated_at = publication.updated_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let mut state = self.state.write();
        if state.publications.remove(&id).is_none() {
            return Ok(false);
        }
        // Mirror the ON DELETE CASCADE of the SQL schema
        state.comments.retain(|_, c| c.publication_id != id);
        state.reactions.retain(|(publication_id, _), _| *publication_id != id);
        Ok(true)
    }
}

#[async_trait]
impl CommentRepository for InMemoryFeedStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        Ok(self.state.read().comments.get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_publication(
        &self,
        publication_id: Snowflake,
        skip: i64,
        take: i64,
    ) -> RepoResult<Page<Comment>> {
        let state = self.state.read();

        let mut matching: Vec<Comment> = state
            .comments
            .values()
            .filter(|c| c.belongs_to(publication_id))
            .cloned()
            .collect();
        matching.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));

        Ok(Page::new(
            paginate(&matching, skip, take),
            matching.len() as i64,
        ))
    }

    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        let mut state = self.state.write();
        if !state.publications.contains_key(&comment.publication_id) {
            return Err(DomainError::PublicationNotFound(comment.publication_id));
        }
        state.comments.insert(comment.id, comment.clone());
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        Ok(self.state.write().comments.remove(&id).is_some())
    }

    async fn delete_by_publication(&self, publication_id: Snowflake) -> RepoResult<u64> {
        let mut state = self.state.write();
        let before = state.comments.len();
        state.comments.retain(|_, c| c.publication_id != publication_id);
        Ok((before - state.comments.len()) as u64)
    }
}

#[async_trait]
impl ReactionRepository for InMemoryFeedStore {
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<()> {
        let mut state = self.state.write();
        if !state.publications.contains_key(&reaction.publication_id) {
            return Err(DomainError::PublicationNotFound(reaction.publication_id));
        }
        state.reactions.insert(
            (reaction.publication_id, reaction.author.clone()),
            reaction.clone(),
        );
        Ok(())
    }

    async fn delete(&self, publication_id: Snowflake, author: &str) -> RepoResult<bool> {
        Ok(self
            .state
            .write()
            .reactions
            .remove(&(publication_id, author.to_string()))
            .is_some())
    }

    async fn find(&self, publication_id: Snowflake, author: &str) -> RepoResult<Option<Reaction>> {
        Ok(self
            .state
            .read()
            .reactions
            .get(&(publication_id, author.to_string()))
            .cloned())
    }

    async fn count_by_type(&self, publication_id: Snowflake) -> RepoResult<Vec<(ReactionType, i64)>> {
        let state = self.state.read();

        let mut counts: BTreeMap<ReactionType, i64> = BTreeMap::new();
        for reaction in state
            .reactions
            .values()
            .filter(|r| r.publication_id == publication_id)
        {
            *counts.entry(reaction.reaction_type).or_default() += 1;
        }

        Ok(counts.into_iter().collect())
    }

    async fn delete_by_publication(&self, publication_id: Snowflake) -> RepoResult<u64> {
        let mut state = self.state.write();
        let before = state.reactions.len();
        state
            .reactions
            .retain(|(id, _), _| *id != publication_id);
        Ok((before - state.reactions.len()) as u64)
    }
}
