//! Custom error types and handling
//!
//! `AppError` is the boundary type every handler returns. Its
//! `IntoResponse` impl maps each variant onto the HTTP taxonomy:
//! 401/404/409 carry a `{"message": ..}` body, 400 carries `{"error": ..}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{constants::INVALID_CREDENTIALS_MESSAGE, db::StoreError};

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid token")]
    InvalidToken,

    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    // Request errors
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    // Hashing, signing and task failures
    #[error("Request could not be processed")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Store(_) => "STORE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized | Self::InvalidToken | Self::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::BadRequest(_) | Self::Store(_) | Self::Internal(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Backend detail goes to the log, the client only sees the category
        match &self {
            AppError::Store(StoreError::Backend(detail)) => {
                tracing::error!(code = self.error_code(), detail = %detail, "Store error");
            }
            AppError::Store(e) => {
                tracing::warn!(code = self.error_code(), error = %e, "Store error");
            }
            AppError::Internal(e) => {
                tracing::error!(code = self.error_code(), "Internal error: {:?}", e);
            }
            _ => {}
        }

        let body = match status {
            StatusCode::BAD_REQUEST => json!({ "error": self.to_string() }),
            _ => json!({ "message": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(_: jsonwebtoken::errors::Error) -> Self {
        AppError::InvalidToken
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_auth_failures_use_message_body() {
        let (status, body) = body_of(AppError::InvalidCredentials).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "message": "Invalid credentials" }));
    }

    #[tokio::test]
    async fn test_not_found_uses_message_body() {
        let (status, body) = body_of(AppError::NotFound("Assignment not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Assignment not found");
    }

    #[tokio::test]
    async fn test_store_backend_detail_is_not_leaked() {
        let err = AppError::Store(StoreError::Backend(
            "relation \"assignments\" does not exist".into(),
        ));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Store operation failed" }));
    }

    #[tokio::test]
    async fn test_duplicate_maps_to_bad_request() {
        let (status, body) = body_of(StoreError::Duplicate("Username".into()).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Username already exists");
    }

    #[tokio::test]
    async fn test_internal_error_is_generic() {
        let err = AppError::Internal(anyhow::anyhow!("argon2 params out of range"));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Request could not be processed");
    }
}
