//! HTTP error mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use thiserror::Error;
use tracing::error;

use super::dto::ErrorResponse;
use crate::message::error::{ErrorKind, MessageServiceError};

/// An error rendered as a JSON response with a status code.
#[derive(Debug, Error)]
#[error("{status}: {message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// A malformed request, reported as `400 Bad Request`.
    #[must_use]
    pub fn invalid_input(detail: impl fmt::Display) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: format!("{}: {detail}", ErrorKind::InvalidInput),
        }
    }

    /// Any service failure reported as `500 Internal Server Error`,
    /// regardless of its kind.
    #[must_use]
    pub fn internal(err: &MessageServiceError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }

    /// Returns the response status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the error description sent to the client.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Maps a service error kind to the status it implies.
#[must_use]
pub const fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<MessageServiceError> for ApiError {
    fn from(err: MessageServiceError) -> Self {
        Self {
            status: status_for(err.kind()),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.message, "request failed");
        }
        let body = ErrorResponse {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
