//! Message use-case service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::message::{
    domain::{Message, MessageId},
    error::{MessageServiceError, MessageServiceResult},
    ports::{IdGenerator, MessageRepository, MessageUseCase},
};

/// Orchestrates message creation, lookup and deletion atop a repository.
///
/// Every operation is a single call to the repository; there are no retries.
/// Repository `NotFound` errors pass through, other failures are wrapped in
/// the service taxonomy with the original cause preserved.
#[derive(Clone)]
pub struct MessageService<R, G>
where
    R: MessageRepository,
    G: IdGenerator,
{
    repository: Arc<R>,
    id_generator: Arc<G>,
}

impl<R, G> MessageService<R, G>
where
    R: MessageRepository,
    G: IdGenerator,
{
    /// Creates a new message service.
    #[must_use]
    pub const fn new(repository: Arc<R>, id_generator: Arc<G>) -> Self {
        Self {
            repository,
            id_generator,
        }
    }
}

#[async_trait]
impl<R, G> MessageUseCase for MessageService<R, G>
where
    R: MessageRepository,
    G: IdGenerator,
{
    async fn create(&self, content: String) -> MessageServiceResult<Message> {
        let message = Message::new(self.id_generator.generate(), content);
        debug!(id = %message.id(), "storing message");

        // Storage failures surface as InvalidInput; see DESIGN.md.
        self.repository.set(&message).await.map_err(|err| {
            warn!(id = %message.id(), error = %err, "failed to store message");
            MessageServiceError::InvalidInput(err)
        })?;
        Ok(message)
    }

    async fn get_by_id(&self, id: &MessageId) -> MessageServiceResult<Message> {
        debug!(%id, "fetching message");
        self.repository
            .get(id)
            .await
            .map_err(MessageServiceError::from_lookup)
            .inspect_err(|err| log_wrapped(err, "failed to fetch message"))
    }

    async fn get_all(&self) -> MessageServiceResult<Vec<Message>> {
        let messages = self.repository.get_all().await.map_err(|err| {
            warn!(error = %err, "failed to list messages");
            MessageServiceError::InternalServerError(err)
        })?;
        debug!(count = messages.len(), "listed messages");
        Ok(messages)
    }

    async fn delete_by_id(&self, id: &MessageId) -> MessageServiceResult<()> {
        debug!(%id, "deleting message");
        self.repository
            .delete(id)
            .await
            .map_err(MessageServiceError::from_lookup)
            .inspect_err(|err| log_wrapped(err, "failed to delete message"))
    }
}

fn log_wrapped(err: &MessageServiceError, context: &str) {
    if !err.is_not_found() {
        warn!(error = %err, "{context}");
    }
}
