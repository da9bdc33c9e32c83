/// Data models for blog-service
///
/// This module defines structures for:
/// - Post: a blog post with title, content and author
pub mod post;

pub use post::{Post, PostId, PostValidationError, MAX_TITLE_LENGTH};
