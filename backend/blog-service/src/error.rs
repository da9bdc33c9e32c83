/// Error types for Blog Service
///
/// Errors are converted to `{ "error": <code>, "message": <text> }` JSON
/// responses for API clients.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for HTTP handlers
pub type Result<T> = std::result::Result<T, AppError>;

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body or path failed validation
    #[error("{0}")]
    Validation(String),

    /// The post could not be created
    #[error("{0}")]
    CreationFailed(String),

    /// The post could not be updated
    #[error("{0}")]
    UpdateFailed(String),

    #[error("Post not found")]
    NotFound,

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Machine-readable code placed in the `error` field
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::CreationFailed(_) => "creation_failed",
            AppError::UpdateFailed(_) => "update_failed",
            AppError::NotFound => "not_found",
            AppError::Internal(_) => "internal_error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::CreationFailed(_) | AppError::UpdateFailed(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.code().to_string(),
            message: Some(self.to_string()),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::CreationFailed("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UpdateFailed("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_error_response_body() {
        let resp = AppError::NotFound.error_response();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(parsed.error, "not_found");
        assert_eq!(parsed.message.as_deref(), Some("Post not found"));
    }

    #[test]
    fn test_message_omitted_when_absent() {
        let body = serde_json::to_value(ErrorResponse {
            error: "internal_error".into(),
            message: None,
        })
        .unwrap();

        assert_eq!(body, serde_json::json!({ "error": "internal_error" }));
    }
}
