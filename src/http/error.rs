//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;
use crate::db::services::ServiceError;
use crate::services::planner::PlanError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (shape or content validation)
    BadRequest(String),
    /// Rejected reconciler operation
    Plan(PlanError),
    /// Repository error
    Repository(RepositoryError),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("MALFORMED_INPUT", msg),
            ),
            AppError::Plan(e) => {
                let (status, code) = match &e {
                    PlanError::DuplicateCourse(_) => (StatusCode::CONFLICT, "DUPLICATE_COURSE"),
                    PlanError::UnknownCourse(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_COURSE"),
                    PlanError::UnknownSemester(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_SEMESTER"),
                    PlanError::InvalidMove { .. } => (StatusCode::BAD_REQUEST, "INVALID_MOVE"),
                    PlanError::InvalidName => (StatusCode::BAD_REQUEST, "INVALID_NAME"),
                };
                (status, ApiError::new(code, e.to_string()))
            }
            AppError::Repository(e) => match &e {
                RepositoryError::NotFound { message, .. } => (
                    StatusCode::NOT_FOUND,
                    ApiError::new("NOT_FOUND", message.clone()),
                ),
                RepositoryError::ValidationError { message, .. } => (
                    StatusCode::BAD_REQUEST,
                    ApiError::new("MALFORMED_INPUT", message.clone()),
                ),
                RepositoryError::StorageError { message, .. } => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ApiError::new("STORAGE_UNAVAILABLE", message.clone())
                        .with_details(e.context().to_string()),
                ),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("REPOSITORY_ERROR", e.to_string()),
                ),
            },
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<PlanError> for AppError {
    fn from(err: PlanError) -> Self {
        AppError::Plan(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Plan(e) => AppError::Plan(e),
            ServiceError::Repository(e) => AppError::Repository(e),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
