/// Post entity - the validated blog post record
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier assigned to posts by the repository
pub type PostId = i64;

/// Maximum number of characters allowed in a post title
pub const MAX_TITLE_LENGTH: usize = 255;

/// Rule violated by a post's fields.
///
/// Rules are checked in declaration order and only the first violation is
/// reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostValidationError {
    #[error("title is required")]
    TitleRequired,

    #[error("content is required")]
    ContentRequired,

    #[error("author is required")]
    AuthorRequired,

    #[error("title must be less than 255 characters")]
    TitleTooLong,
}

/// A blog post.
///
/// Posts are plain values: every copy handed out by the repository is
/// independent of the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
}

impl Post {
    /// Build a post, rejecting it if any field is invalid
    pub fn new(
        id: PostId,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Self, PostValidationError> {
        let post = Self {
            id,
            title: title.into(),
            content: content.into(),
            author: author.into(),
        };

        post.validate()?;
        Ok(post)
    }

    /// Replace title, content and author.
    ///
    /// The new values are validated first; on error the post is untouched.
    pub fn update(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<(), PostValidationError> {
        let (title, content, author) = (title.into(), content.into(), author.into());
        validate_fields(&title, &content, &author)?;

        self.title = title;
        self.content = content;
        self.author = author;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), PostValidationError> {
        validate_fields(&self.title, &self.content, &self.author)
    }
}

fn validate_fields(title: &str, content: &str, author: &str) -> Result<(), PostValidationError> {
    if title.trim().is_empty() {
        return Err(PostValidationError::TitleRequired);
    }
    if content.trim().is_empty() {
        return Err(PostValidationError::ContentRequired);
    }
    if author.trim().is_empty() {
        return Err(PostValidationError::AuthorRequired);
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(PostValidationError::TitleTooLong);
    }
    Ok(())
}
