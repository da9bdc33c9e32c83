/// Post handlers - HTTP endpoints for post operations
use crate::db::RepositoryError;
use crate::error::{AppError, Result};
use crate::models::{Post, PostId};
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(length(min = 1))]
    pub author: String,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(length(min = 1))]
    pub author: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostResponse {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostsResponse {
    pub posts: Vec<PostResponse>,
    pub total: usize,
}

impl From<Vec<Post>> for PostsResponse {
    fn from(posts: Vec<Post>) -> Self {
        let posts: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
        Self {
            total: posts.len(),
            posts,
        }
    }
}

/// Ids are plain decimal integers; surrounding whitespace is not accepted
fn parse_post_id(raw: &str) -> Result<PostId> {
    raw.parse()
        .map_err(|_| AppError::Validation("Invalid post ID format".to_string()))
}

/// Create a new post
pub async fn create_post(
    service: web::Data<PostService>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    req.validate().map_err(|e| {
        tracing::error!(error = %e, "Invalid request body");
        AppError::from(e)
    })?;

    let post = service
        .create_post(&req.title, &req.content, &req.author)
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to create post");
            AppError::CreationFailed(e.to_string())
        })?;

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// Get a post by ID
pub async fn get_post(
    service: web::Data<PostService>,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_post_id(&post_id)?;

    let post = service.get_post_by_id(id).map_err(|e| match e {
        RepositoryError::NotFound => AppError::NotFound,
        other => {
            tracing::error!(post_id = id, error = %other, "Failed to get post");
            AppError::Internal("Failed to retrieve post".to_string())
        }
    })?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// List all posts in id order
pub async fn get_all_posts(service: web::Data<PostService>) -> Result<HttpResponse> {
    let posts = service.get_all_posts();
    Ok(HttpResponse::Ok().json(PostsResponse::from(posts)))
}

/// Replace a post's title, content and author
///
/// The body is taken raw and decoded after the id, so a bad id is reported
/// ahead of a bad body.
pub async fn update_post(
    service: web::Data<PostService>,
    post_id: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let id = parse_post_id(&post_id)?;

    let req: UpdatePostRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(post_id = id, error = %e, "Invalid request body");
        AppError::Validation(e.to_string())
    })?;

    req.validate().map_err(|e| {
        tracing::error!(error = %e, "Invalid request body");
        AppError::from(e)
    })?;

    let post = service
        .update_post(id, &req.title, &req.content, &req.author)
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound,
            other => {
                tracing::error!(post_id = id, error = %other, "Failed to update post");
                AppError::UpdateFailed(other.to_string())
            }
        })?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// Delete a post
pub async fn delete_post(
    service: web::Data<PostService>,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_post_id(&post_id)?;

    service.delete_post(id).map_err(|e| match e {
        RepositoryError::NotFound => AppError::NotFound,
        other => {
            tracing::error!(post_id = id, error = %other, "Failed to delete post");
            AppError::Internal("Failed to delete post".to_string())
        }
    })?;

    Ok(HttpResponse::NoContent().finish())
}
