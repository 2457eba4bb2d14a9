//! Error taxonomy for task execution and the HTTP surface.
//!
//! Two tiers: request-shape errors (unrecognized task, forbidden keyword,
//! sandbox violation, missing input) map to 4xx with a human-readable
//! message; everything else maps to 500 with the raw error text as the body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Unrecognized task")]
    Unrecognized,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    BadInput(String),

    #[error("File not found")]
    NotFound,

    #[error("{0}")]
    Internal(anyhow::Error),
}

impl TaskError {
    pub fn status(&self) -> StatusCode {
        match self {
            TaskError::Unrecognized | TaskError::Forbidden(_) | TaskError::BadInput(_) => {
                StatusCode::BAD_REQUEST
            }
            TaskError::NotFound => StatusCode::NOT_FOUND,
            TaskError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.to_string();

        if status.is_server_error() {
            error!(status = %status, error = %body, "Task failed");
        } else {
            warn!(status = %status, error = %body, "Request rejected");
        }

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for TaskError {
    fn from(err: anyhow::Error) -> Self {
        TaskError::Internal(err)
    }
}

impl From<std::io::Error> for TaskError {
    fn from(err: std::io::Error) -> Self {
        TaskError::Internal(err.into())
    }
}

impl From<reqwest::Error> for TaskError {
    fn from(err: reqwest::Error) -> Self {
        TaskError::Internal(err.into())
    }
}

impl From<rusqlite::Error> for TaskError {
    fn from(err: rusqlite::Error) -> Self {
        TaskError::Internal(err.into())
    }
}

impl From<serde_json::Error> for TaskError {
    fn from(err: serde_json::Error) -> Self {
        TaskError::Internal(err.into())
    }
}
