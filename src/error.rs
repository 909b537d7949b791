// API error taxonomy shared by handlers, gateway and orchestrator.
//
// Provider failures never appear here: every adapter recovers them locally
// through its fallback arm and answers 200 with substitute content. What is
// left are the caller's own mistakes and the genuinely unexpected.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    /// A required field is missing or empty. No fallback, no side effect.
    #[error("{0}")]
    InvalidInput(&'static str),

    /// Transition requested out of order; the workflow step is unchanged.
    #[error("{0}")]
    OutOfOrder(&'static str),

    /// Another transition is in flight on this session.
    #[error("workflow is busy with another step")]
    Busy,

    #[error("workflow session not found")]
    SessionNotFound,

    /// Anything that was not supposed to happen while handling a request.
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::OutOfOrder(_) | ApiError::Busy => StatusCode::CONFLICT,
            ApiError::SessionNotFound => StatusCode::NOT_FOUND,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// A body that fails to parse lands on the catch-all 500, matching the
// taxonomy's UnexpectedFailure class rather than a validation error.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Unexpected(rejection.to_string())
    }
}
