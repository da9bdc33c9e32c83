/// Post service - handles post creation, retrieval, and management
use crate::db::{PostRepository, Result};
use crate::models::{Post, PostId};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Create a new post with a repository-assigned id
    pub fn create_post(&self, title: &str, content: &str, author: &str) -> Result<Post> {
        info!(title, author, "Creating new post");

        let post = self.repo.create_post(title, content, author)?;

        info!(post_id = post.id, "Post created successfully");
        Ok(post)
    }

    /// Get a post by ID
    pub fn get_post_by_id(&self, id: PostId) -> Result<Post> {
        debug!(post_id = id, "Retrieving post by ID");
        self.repo.get_by_id(id)
    }

    /// Get every post, ordered by id
    pub fn get_all_posts(&self) -> Vec<Post> {
        debug!("Retrieving all posts");

        let posts = self.repo.get_all();

        debug!(count = posts.len(), "Retrieved posts");
        posts
    }

    /// Replace title, content and author of an existing post
    pub fn update_post(
        &self,
        id: PostId,
        title: &str,
        content: &str,
        author: &str,
    ) -> Result<Post> {
        info!(post_id = id, title, author, "Updating post");

        let mut post = self.repo.get_by_id(id)?;
        post.update(title, content, author)?;
        self.repo.update(id, &post)?;

        info!(post_id = id, "Post updated successfully");
        Ok(post)
    }

    /// Delete a post
    pub fn delete_post(&self, id: PostId) -> Result<()> {
        info!(post_id = id, "Deleting post");

        self.repo.delete(id)?;

        info!(post_id = id, "Post deleted successfully");
        Ok(())
    }
}
