/// Startup data loading from a JSON file
///
/// Expected format:
///
/// ```json
/// { "posts": [ { "id": 1, "title": "...", "content": "...", "author": "..." } ] }
/// ```
///
/// Every record is validated before anything reaches the repository; one bad
/// record aborts the whole load.
use super::{PostRepository, RepositoryError};
use crate::models::{Post, PostId, PostValidationError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse blog data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid post id {id}: ids must be between 1 and {}", PostId::MAX - 1)]
    InvalidId { id: PostId },

    #[error("invalid post {id}: {source}")]
    InvalidPost {
        id: PostId,
        #[source]
        source: PostValidationError,
    },

    #[error("failed to store blog data: {0}")]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Deserialize)]
struct PostData {
    id: PostId,
    title: String,
    content: String,
    author: String,
}

#[derive(Debug, Deserialize)]
struct BlogData {
    posts: Vec<PostData>,
}

pub struct DataLoader {
    repo: Arc<dyn PostRepository>,
}

impl DataLoader {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Load posts from `path` into the repository, returning how many were loaded
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<usize, LoaderError> {
        let path = path.as_ref();
        info!(filename = %path.display(), "Loading blog data from file");

        let data = std::fs::read_to_string(path).map_err(|source| {
            error!(filename = %path.display(), error = %source, "Failed to read data file");
            LoaderError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

        self.load_from_str(&data)
    }

    /// Load posts from an in-memory JSON document
    pub fn load_from_str(&self, data: &str) -> Result<usize, LoaderError> {
        let blog_data: BlogData = serde_json::from_str(data).map_err(|e| {
            error!(error = %e, "Failed to parse JSON data");
            LoaderError::from(e)
        })?;

        let posts = blog_data
            .posts
            .into_iter()
            .map(|data| {
                let id = data.id;
                if id <= 0 || id == PostId::MAX {
                    error!(post_id = id, "Post id out of range");
                    return Err(LoaderError::InvalidId { id });
                }
                Post::new(id, data.title, data.content, data.author).map_err(|source| {
                    error!(post_id = id, error = %source, "Failed to create post entity");
                    LoaderError::InvalidPost { id, source }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.repo.load_data(&posts)?;

        info!(count = posts.len(), "Successfully loaded blog posts");
        Ok(posts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryPostRepository;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BLOG_DATA: &str = r#"{
        "posts": [
            { "id": 2, "title": "Second", "content": "Body two", "author": "Bob" },
            { "id": 5, "title": "Fifth", "content": "Body five", "author": "Alice" }
        ]
    }"#;

    fn loader() -> (Arc<InMemoryPostRepository>, DataLoader) {
        let repo = Arc::new(InMemoryPostRepository::new());
        let loader = DataLoader::new(repo.clone());
        (repo, loader)
    }

    fn write_fixture(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_from_file() {
        let (repo, loader) = loader();
        let file = write_fixture(BLOG_DATA);

        let count = loader.load_from_file(file.path()).unwrap();

        assert_eq!(count, 2);
        assert_eq!(repo.get_by_id(2).unwrap().author, "Bob");
        assert_eq!(repo.get_by_id(5).unwrap().title, "Fifth");
        assert_eq!(repo.create_post("Next", "Body", "Carol").unwrap().id, 6);
    }

    #[test]
    fn test_invalid_record_aborts_load() {
        let (repo, loader) = loader();
        let data = r#"{
            "posts": [
                { "id": 1, "title": "Fine", "content": "Body", "author": "Bob" },
                { "id": 2, "title": "Broken", "content": "Body", "author": "   " }
            ]
        }"#;

        let err = loader.load_from_str(data).unwrap_err();

        match err {
            LoaderError::InvalidPost { id, source } => {
                assert_eq!(id, 2);
                assert_eq!(source, PostValidationError::AuthorRequired);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(repo.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let (_repo, loader) = loader();
        let dir = tempfile::tempdir().unwrap();

        let err = loader
            .load_from_file(dir.path().join("blog_data.json"))
            .unwrap_err();

        assert!(matches!(err, LoaderError::Io { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let (repo, loader) = loader();
        let file = write_fixture("{ \"posts\": [ { \"id\": 1, ");

        let err = loader.load_from_file(file.path()).unwrap_err();

        assert!(matches!(err, LoaderError::Parse(_)));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_empty_post_list() {
        let (repo, loader) = loader();

        assert_eq!(loader.load_from_str(r#"{ "posts": [] }"#).unwrap(), 0);
        assert!(repo.is_empty());
    }

    #[test]
    fn test_out_of_range_ids_abort_load() {
        let max = PostId::MAX.to_string();
        for bad_id in ["0", "-4", max.as_str()] {
            let (repo, loader) = loader();
            let data = format!(
                r#"{{
                    "posts": [
                        {{ "id": 1, "title": "Fine", "content": "Body", "author": "Bob" }},
                        {{ "id": {bad_id}, "title": "Odd", "content": "Body", "author": "Ann" }}
                    ]
                }}"#
            );

            let err = loader.load_from_str(&data).unwrap_err();

            assert!(
                matches!(err, LoaderError::InvalidId { id } if id.to_string() == bad_id),
                "unexpected error for {bad_id}: {err:?}"
            );
            assert!(repo.is_empty());
        }
    }

    #[test]
    fn test_largest_valid_id_loads() {
        let (repo, loader) = loader();
        let data = format!(
            r#"{{ "posts": [ {{ "id": {}, "title": "Last", "content": "Body", "author": "Ann" }} ] }}"#,
            PostId::MAX - 1
        );

        assert_eq!(loader.load_from_str(&data).unwrap(), 1);
        assert!(repo.exists(PostId::MAX - 1));
        assert_eq!(
            repo.create_post("Next", "Body", "Carol").unwrap_err(),
            RepositoryError::IdsExhausted
        );
    }
}
