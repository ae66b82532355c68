//! In-memory store - used when no database is configured.
//!
//! Note: Data is lost on process restart.

use std::collections::HashMap;
use std::hash::Hash;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Category, Comment, Post, PostDraft, PostQuery};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, CategoryRepository, CommentRepository, PostRepository};

/// Entities that know their own key.
pub trait Keyed {
    type Key: Eq + Hash + Copy + Send + Sync;

    fn key(&self) -> Self::Key;
}

impl Keyed for Post {
    type Key = Uuid;

    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for Category {
    type Key = Uuid;

    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for Comment {
    type Key = Uuid;

    fn key(&self) -> Uuid {
        self.id
    }
}

/// A single collection guarded by an async `RwLock`.
///
/// Every mutation happens under the write lock, so counter updates are
/// atomic with respect to each other.
pub struct InMemoryCollection<T: Keyed> {
    rows: RwLock<HashMap<T::Key, T>>,
}

impl<T: Keyed> InMemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Keyed> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> BaseRepository<T, T::Key> for InMemoryCollection<T>
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: T::Key) -> Result<Option<T>, RepoError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&entity.key()) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        rows.insert(entity.key(), entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: T::Key) -> Result<(), RepoError> {
        self.rows.write().await.remove(&id);
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.rows.read().await.len() as u64)
    }
}

/// In-memory post repository.
pub type InMemoryPostRepository = InMemoryCollection<Post>;

/// In-memory category repository.
pub type InMemoryCategoryRepository = InMemoryCollection<Category>;

/// In-memory comment repository.
pub type InMemoryCommentRepository = InMemoryCollection<Comment>;

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self, query: PostQuery) -> Result<Vec<Post>, RepoError> {
        let rows = self.rows.read().await;
        Ok(query.apply(rows.values().cloned()))
    }

    async fn update(&self, id: Uuid, draft: PostDraft) -> Result<Post, RepoError> {
        let mut rows = self.rows.write().await;
        let post = rows.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.apply(draft);
        Ok(post.clone())
    }

    async fn record_view(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let mut rows = self.rows.write().await;
        Ok(rows.get_mut(&id).map(|post| {
            post.views += 1;
            post.clone()
        }))
    }

    async fn record_like(&self, id: Uuid) -> Result<(), RepoError> {
        if let Some(post) = self.rows.write().await.get_mut(&id) {
            post.likes += 1;
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list_by_name(&self) -> Result<Vec<Category>, RepoError> {
        let rows = self.rows.read().await;
        let mut categories: Vec<Category> = rows.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn rename(&self, id: Uuid, name: String) -> Result<Category, RepoError> {
        let mut rows = self.rows.write().await;
        let category = rows.get_mut(&id).ok_or(RepoError::NotFound)?;
        category.rename(name);
        Ok(category.clone())
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_post(&self, post_id: &str) -> Result<Vec<Comment>, RepoError> {
        let rows = self.rows.read().await;
        let mut comments: Vec<Comment> = rows
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }
}
