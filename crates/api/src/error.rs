use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Request-level error taxonomy. Every variant renders as `{"msg": ...}`
/// JSON; conflicts map to 400 to match the wire contract clients expect.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthenticated(&'static str),
    #[error("{0}")]
    Forbidden(&'static str),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(&'static str),
    #[error("{0}")]
    InvalidInput(String),
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) | ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(err) = &self {
            // Internals are logged server-side and masked on the wire.
            tracing::error!(error = %err, "request failed");
        }
        let status = self.status();
        (status, Json(json!({ "msg": self.to_string() }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => ApiError::Conflict("Email is already in use"),
            StoreError::AlreadyCheckedIn => ApiError::Conflict("Already checked in today"),
            StoreError::NoActiveCheckIn => ApiError::Conflict("No active check-in found"),
            StoreError::HrReviewPending => {
                ApiError::Conflict("Leave must be approved by HR first")
            }
            StoreError::AlreadyReviewed => {
                ApiError::Conflict("Leave has already been reviewed by HR")
            }
            StoreError::AlreadyFinalized => ApiError::Conflict("Leave decision is final"),
            StoreError::NotTaskAssignee => {
                ApiError::Forbidden("Not authorized to update this task")
            }
            StoreError::UserNotFound => ApiError::NotFound("User"),
            StoreError::TaskNotFound => ApiError::NotFound("Task"),
            StoreError::LeaveNotFound => ApiError::NotFound("Leave"),
        }
    }
}
