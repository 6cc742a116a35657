use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractError;
use crate::matching::analyzer::MatchError;
use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    JobTextUnavailable(String),

    #[error("{0}")]
    ResumeTextUnavailable(String),

    #[error("Analysis backend API key not configured")]
    BackendNotConfigured,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<ExtractError> for AppError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::UnsupportedFormat(_) => AppError::UnsupportedFormat(e.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(..) => AppError::NotFound(e.to_string()),
            StoreError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<MatchError> for AppError {
    fn from(e: MatchError) -> Self {
        match e {
            MatchError::JobTextUnavailable => AppError::JobTextUnavailable(e.to_string()),
            MatchError::ResumeTextUnavailable => AppError::ResumeTextUnavailable(e.to_string()),
            MatchError::BackendNotConfigured => AppError::BackendNotConfigured,
            MatchError::Store(e) => e.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::UnsupportedFormat(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNSUPPORTED_FORMAT",
                msg.clone(),
            ),
            AppError::JobTextUnavailable(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "JOB_TEXT_UNAVAILABLE",
                msg.clone(),
            ),
            AppError::ResumeTextUnavailable(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "RESUME_TEXT_UNAVAILABLE",
                msg.clone(),
            ),
            AppError::BackendNotConfigured => {
                tracing::error!("Analysis requested without a configured backend credential");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "BACKEND_NOT_CONFIGURED",
                    "Analysis backend API key not configured".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
