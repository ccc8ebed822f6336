//! Unified error handling for the API.
//!
//! Every failure kind is deterministic for a given input, so nothing here is
//! ever retried; each error aborts its operation and propagates to the
//! client as a distinct, named condition.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::ValidationError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Storage operation failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A referenced user exists but has the wrong role for the slot it was
    /// used in.
    #[error("{0}")]
    InvalidRole(String),

    /// An argument references an entity that fails a field precondition.
    #[error("{0}")]
    InvalidArgument(String),

    /// Entity exists and roles match, but business state forbids the
    /// operation (e.g. inactive product).
    #[error("{0}")]
    InvalidState(String),

    /// Uniqueness conflict (duplicate email).
    #[error("{0}")]
    Conflict(String),

    /// Malformed input caught at the request-mapping boundary.
    #[error("{0}")]
    Validation(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl AppError {
    /// Stable machine-readable kind for the response body.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Repository(RepositoryError::Conflict(_)) | Self::Conflict(_) => "conflict",
            Self::Repository(_) | Self::Internal(_) => "internal_error",
            Self::NotFound(_) => "not_found",
            Self::InvalidRole(_) => "invalid_role",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::InvalidState(_) => "invalid_state",
            Self::Validation(_) => "validation_error",
        }
    }

    /// HTTP status this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Repository(RepositoryError::Conflict(_)) | Self::Conflict(_) => {
                StatusCode::CONFLICT
            }
            Self::Repository(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidRole(_)
            | Self::InvalidArgument(_)
            | Self::InvalidState(_)
            | Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log server errors with Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "API request error"
            );
        }

        // Don't expose internal error details to clients
        let message = if status.is_server_error() {
            "internal server error".to_owned()
        } else {
            self.to_string()
        };

        let body = ErrorBody {
            error: self.kind(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
