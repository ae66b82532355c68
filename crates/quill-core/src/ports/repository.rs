use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Category, Comment, Post, PostDraft, PostQuery};
use crate::error::RepoError;

/// Generic repository trait defining the operations every collection shares.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Deleting an unknown ID succeeds.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;

    /// Number of stored entities.
    async fn count(&self) -> Result<u64, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    async fn list(&self, query: PostQuery) -> Result<Vec<Post>, RepoError>;

    /// Overwrite the editable fields of a post.
    ///
    /// Returns [`RepoError::NotFound`] when the post does not exist.
    async fn update(&self, id: Uuid, draft: PostDraft) -> Result<Post, RepoError>;

    /// Atomically add one view, then return the post (`None` if missing).
    async fn record_view(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Atomically add one like. Unknown IDs are silently ignored.
    async fn record_like(&self, id: Uuid) -> Result<(), RepoError>;
}

/// Category repository.
#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, Uuid> {
    /// All categories ordered by name ascending.
    async fn list_by_name(&self) -> Result<Vec<Category>, RepoError>;

    /// Change the name and re-derive the slug. Posts are not touched.
    ///
    /// Returns [`RepoError::NotFound`] when the category does not exist.
    async fn rename(&self, id: Uuid, name: String) -> Result<Category, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    /// Comments on a post, newest first.
    async fn find_by_post(&self, post_id: &str) -> Result<Vec<Comment>, RepoError>;
}
