/// In-memory post repository
///
/// A single reader/writer lock guards both the post map and the id counter,
/// so id allocation and insertion happen as one step. Reads take the shared
/// lock; every mutation takes the exclusive lock. No I/O happens while a lock
/// is held.
use super::{PostRepository, RepositoryError, Result};
use crate::models::{Post, PostId};
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Debug)]
struct RepositoryState {
    posts: HashMap<PostId, Post>,
    /// Always greater than every id ever stored
    next_id: PostId,
}

impl RepositoryState {
    /// Only called with ids accepted by `check_id`, so `id + 1` cannot overflow
    fn advance_past(&mut self, id: PostId) {
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }
}

/// Stored ids are positive and leave room for the counter to move past them
fn check_id(id: PostId) -> Result<()> {
    if id > 0 && id < PostId::MAX {
        Ok(())
    } else {
        Err(RepositoryError::InvalidId(id))
    }
}

#[derive(Debug)]
pub struct InMemoryPostRepository {
    state: RwLock<RepositoryState>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RepositoryState {
                posts: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.state.read().posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PostRepository for InMemoryPostRepository {
    fn create_post(&self, title: &str, content: &str, author: &str) -> Result<Post> {
        let mut state = self.state.write();

        // Validate before taking the id so invalid input leaves no gap
        let post = Post::new(state.next_id, title, content, author)?;
        state.next_id = state
            .next_id
            .checked_add(1)
            .ok_or(RepositoryError::IdsExhausted)?;
        state.posts.insert(post.id, post.clone());

        Ok(post)
    }

    fn create(&self, post: &Post) -> Result<()> {
        check_id(post.id)?;
        let mut state = self.state.write();

        if state.posts.contains_key(&post.id) {
            return Err(RepositoryError::AlreadyExists);
        }

        state.posts.insert(post.id, post.clone());
        state.advance_past(post.id);

        Ok(())
    }

    fn get_by_id(&self, id: PostId) -> Result<Post> {
        self.state
            .read()
            .posts
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    fn get_all(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self.state.read().posts.values().cloned().collect();
        posts.sort_by_key(|post| post.id);
        posts
    }

    fn update(&self, id: PostId, post: &Post) -> Result<()> {
        let mut state = self.state.write();

        let stored = state.posts.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        *stored = Post {
            id,
            ..post.clone()
        };

        Ok(())
    }

    fn delete(&self, id: PostId) -> Result<()> {
        self.state
            .write()
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    fn exists(&self, id: PostId) -> bool {
        self.state.read().posts.contains_key(&id)
    }

    fn load_data(&self, posts: &[Post]) -> Result<()> {
        posts.iter().try_for_each(|post| check_id(post.id))?;

        let mut state = self.state.write();
        for post in posts {
            state.posts.insert(post.id, post.clone());
            state.advance_past(post.id);
        }

        Ok(())
    }
}
