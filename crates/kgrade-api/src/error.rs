use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use kgrade_core::CoreError;
use kgrade_model::ModelError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input; nothing was submitted.
    #[error("{0}")]
    InvalidRequest(String),

    /// The request body could not be read or parsed.
    #[error("{0}")]
    Transport(String),

    /// The cluster refused the job. Carries the cluster's message unmodified.
    ///
    /// Only acceptable while callers are trusted internal infrastructure.
    #[error("failed to create job: {0}")]
    Upstream(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) | ApiError::Transport(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ModelError> for ApiError {
    fn from(e: ModelError) -> Self {
        ApiError::InvalidRequest(e.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Rejected { .. } | CoreError::Transport(_) => {
                ApiError::Upstream(e.to_string())
            }
            CoreError::Credentials(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
