//! Inbound port exposing message operations to driving adapters.
//!
//! The HTTP adapter depends on this trait rather than on
//! [`MessageService`](crate::message::services::MessageService) directly,
//! so handlers can be exercised against any implementation.

use crate::message::{
    domain::{Message, MessageId},
    error::MessageServiceResult,
};
use async_trait::async_trait;

/// Message create, read and delete operations.
#[async_trait]
pub trait MessageUseCase: Send + Sync {
    /// Creates and stores a message with a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::InvalidInput`] wrapping the repository
    /// failure when the message cannot be stored.
    ///
    /// [`MessageServiceError::InvalidInput`]: crate::message::error::MessageServiceError::InvalidInput
    async fn create(&self, content: String) -> MessageServiceResult<Message>;

    /// Retrieves a message by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::NotFound`] for unknown identifiers and
    /// [`MessageServiceError::InternalServerError`] for any other failure.
    ///
    /// [`MessageServiceError::NotFound`]: crate::message::error::MessageServiceError::NotFound
    /// [`MessageServiceError::InternalServerError`]: crate::message::error::MessageServiceError::InternalServerError
    async fn get_by_id(&self, id: &MessageId) -> MessageServiceResult<Message>;

    /// Retrieves every stored message in unspecified order.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::InternalServerError`] when the
    /// repository fails.
    ///
    /// [`MessageServiceError::InternalServerError`]: crate::message::error::MessageServiceError::InternalServerError
    async fn get_all(&self) -> MessageServiceResult<Vec<Message>>;

    /// Deletes a message by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::NotFound`] for unknown identifiers and
    /// [`MessageServiceError::InternalServerError`] for any other failure.
    ///
    /// [`MessageServiceError::NotFound`]: crate::message::error::MessageServiceError::NotFound
    /// [`MessageServiceError::InternalServerError`]: crate::message::error::MessageServiceError::InternalServerError
    async fn delete_by_id(&self, id: &MessageId) -> MessageServiceResult<()>;
}
