//! Repository port for message persistence.
//!
//! Defines the abstract interface for storing and retrieving messages so the
//! service layer stays storage-agnostic (in-memory today, any durable store
//! later).

use crate::message::domain::{Message, MessageId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for message repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Port for message persistence operations.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - `set` inserts or overwrites unconditionally; there is no uniqueness
///   check on the identifier
/// - `get_all` never returns partial results: a single unreadable entry
///   fails the whole call
/// - Concurrent access is handled safely
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Stores a message, replacing any message with the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Serialization`] when the message cannot be
    /// encoded or [`RepositoryError::Persistence`] when the backing store
    /// fails.
    async fn set(&self, message: &Message) -> RepositoryResult<()>;

    /// Retrieves a message by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when no message is stored under
    /// `id`, and [`RepositoryError::Deserialization`] when the stored entry
    /// cannot be decoded.
    async fn get(&self, id: &MessageId) -> RepositoryResult<Message>;

    /// Retrieves every stored message. Ordering is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Deserialization`] when any stored entry
    /// cannot be decoded.
    async fn get_all(&self) -> RepositoryResult<Vec<Message>>;

    /// Removes a message by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when no message is stored under
    /// `id`.
    async fn delete(&self, id: &MessageId) -> RepositoryResult<()>;
}

/// Errors returned by message repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// No message is stored under the identifier.
    #[error("message id not found: {0}")]
    NotFound(MessageId),

    /// The message could not be encoded for storage.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A stored entry could not be decoded back into a message.
    #[error("failed to decode message {id}: {reason}")]
    Deserialization {
        /// Identifier of the unreadable entry.
        id: MessageId,
        /// Decoder failure description.
        reason: String,
    },

    /// Backing-store failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Creates a deserialization error for the entry stored under `id`.
    #[must_use]
    pub fn deserialization(id: MessageId, reason: impl Into<String>) -> Self {
        Self::Deserialization {
            id,
            reason: reason.into(),
        }
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns `true` for [`RepositoryError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
