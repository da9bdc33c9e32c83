/// Storage layer
///
/// This module provides:
/// - The `PostRepository` trait consumed by the service layer
/// - An in-memory, thread-safe implementation
/// - Startup loading of posts from a JSON file
pub mod loader;
pub mod post_repo;

pub use loader::{DataLoader, LoaderError};
pub use post_repo::InMemoryPostRepository;

use crate::models::{Post, PostId, PostValidationError};
use thiserror::Error;

/// Result type for repository operations
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("post not found")]
    NotFound,

    #[error("post already exists")]
    AlreadyExists,

    #[error("invalid post id {0}")]
    InvalidId(PostId),

    #[error("post ids exhausted")]
    IdsExhausted,

    #[error(transparent)]
    Validation(#[from] PostValidationError),
}

/// Authoritative collection of posts.
///
/// Implementations must be safe to share between threads. Values passed in
/// are copied before being stored and values returned are copies, so callers
/// can never reach the stored state.
#[cfg_attr(test, mockall::automock)]
pub trait PostRepository: Send + Sync {
    /// Validate the fields, assign the next id and store the post
    fn create_post(&self, title: &str, content: &str, author: &str) -> Result<Post>;

    /// Insert a post with a caller-chosen id; fails if the id is taken
    fn create(&self, post: &Post) -> Result<()>;

    fn get_by_id(&self, id: PostId) -> Result<Post>;

    /// All posts in ascending id order
    fn get_all(&self) -> Vec<Post>;

    /// Replace the post stored under `id`. The stored id is always `id`,
    /// whatever `post.id` says.
    fn update(&self, id: PostId, post: &Post) -> Result<()>;

    fn delete(&self, id: PostId) -> Result<()>;

    fn exists(&self, id: PostId) -> bool;

    /// Insert a batch of posts, overwriting existing ids. A batch holding an
    /// id outside `1..PostId::MAX` is rejected whole.
    fn load_data(&self, posts: &[Post]) -> Result<()>;
}
