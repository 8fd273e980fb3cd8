//! Error taxonomy for message service operations.
//!
//! Repository failures are either passed through (`NotFound`) or wrapped
//! with a taxonomy tag while keeping the original cause reachable through
//! [`std::error::Error::source`]. Callers branch on [`ErrorKind`], never on
//! message text.

use super::{domain::MessageId, ports::RepositoryError};
use std::fmt;
use thiserror::Error;

/// Result type for message service operations.
pub type MessageServiceResult<T> = Result<T, MessageServiceError>;

/// Classification of service failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request was malformed or could not be accepted.
    InvalidInput,
    /// The referenced message does not exist.
    NotFound,
    /// An unexpected repository or codec failure.
    InternalServerError,
}

impl ErrorKind {
    /// Returns the stable snake-case tag for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::NotFound => "not_found",
            Self::InternalServerError => "internal_server_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by the message service.
#[derive(Debug, Error)]
pub enum MessageServiceError {
    /// The message could not be accepted for storage.
    ///
    /// Raised when persisting a newly created message fails.
    #[error("invalid_input: {0}")]
    InvalidInput(#[source] RepositoryError),

    /// No message exists for the identifier.
    #[error("not_found: message id not found: {0}")]
    NotFound(MessageId),

    /// Any other repository failure.
    #[error("internal_server_error: {0}")]
    InternalServerError(#[source] RepositoryError),
}

impl MessageServiceError {
    /// Returns the taxonomy kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InternalServerError(_) => ErrorKind::InternalServerError,
        }
    }

    /// Returns `true` when the error is [`ErrorKind::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Maps a read or delete failure: `NotFound` passes through, anything
    /// else becomes [`MessageServiceError::InternalServerError`].
    #[must_use]
    pub fn from_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::InternalServerError(other),
        }
    }
}
