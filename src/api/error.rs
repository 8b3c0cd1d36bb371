//! Maps crate errors onto HTTP responses.

use crate::errors::{Error, ErrorKind};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Body of every message-only response, success or failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    /// Human-readable message
    pub msg: String,
}

impl MessageBody {
    /// Wraps a message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Error returned by handlers.
#[derive(Debug)]
pub enum ApiError {
    /// A typed error from the core
    Core(Error),
    /// The request body was not valid JSON for the endpoint
    InvalidBody(JsonRejection),
    /// A path parameter could not be parsed (e.g. a non-numeric id)
    InvalidPath(PathRejection),
}

impl ApiError {
    /// Status code this error is reported with.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Core(err) => match err.kind() {
                ErrorKind::Validation => StatusCode::BAD_REQUEST,
                ErrorKind::Conflict => StatusCode::CONFLICT,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::InvalidBody(rejection) => rejection.status(),
            Self::InvalidPath(rejection) => rejection.status(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::Core(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let msg = match self {
            Self::Core(err) if status.is_server_error() => {
                // Keep database internals out of the response
                error!(error = %err, "request failed");
                "Internal server error".to_string()
            }
            Self::Core(err) => {
                warn!(status = status.as_u16(), error = %err, "request rejected");
                err.to_string()
            }
            Self::InvalidBody(rejection) => {
                warn!(error = %rejection.body_text(), "invalid request body");
                rejection.body_text()
            }
            Self::InvalidPath(rejection) => {
                warn!(error = %rejection.body_text(), "invalid path parameter");
                rejection.body_text()
            }
        };
        (status, Json(MessageBody { msg })).into_response()
    }
}

/// Result type for handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;
