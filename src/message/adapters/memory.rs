//! In-memory implementation of the `MessageRepository` port.
//!
//! Messages are stored as JSON-encoded bytes keyed by identifier, so every
//! read goes through the same decode path a durable byte store would.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use crate::message::{
    domain::{Message, MessageId},
    ports::repository::{MessageRepository, RepositoryError, RepositoryResult},
};

type Entries = HashMap<MessageId, Vec<u8>>;

/// In-memory implementation of [`MessageRepository`].
///
/// Thread-safe via an internal [`RwLock`]: writers are serialised and
/// [`MessageRepository::get_all`] decodes a consistent snapshot. Clones share
/// the same underlying store.
///
/// # Example
///
/// ```
/// use pigeon::message::adapters::memory::InMemoryMessageRepository;
///
/// let repo = InMemoryMessageRepository::new();
/// assert!(repo.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryMessageRepository {
    entries: Arc<RwLock<Entries>>,
}

impl InMemoryMessageRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    ///
    /// Returns `0` if the internal lock is poisoned. For error-propagating
    /// access, use the repository trait methods instead.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores raw bytes under `id`, bypassing encoding.
    ///
    /// Intended for diagnostics and tests that need to place entries the
    /// codec would never produce.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] if the internal lock is
    /// poisoned.
    pub fn insert_raw(&self, id: MessageId, bytes: impl Into<Vec<u8>>) -> RepositoryResult<()> {
        let mut guard = self.entries.write().map_err(poisoned)?;
        guard.insert(id, bytes.into());
        Ok(())
    }
}

fn poisoned<T>(err: PoisonError<T>) -> RepositoryError {
    RepositoryError::persistence(std::io::Error::other(format!("lock poisoned: {err}")))
}

fn decode(id: &MessageId, bytes: &[u8]) -> RepositoryResult<Message> {
    serde_json::from_slice(bytes)
        .map_err(|err| RepositoryError::deserialization(id.clone(), err.to_string()))
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn set(&self, message: &Message) -> RepositoryResult<()> {
        let encoded = serde_json::to_vec(message)
            .map_err(|err| RepositoryError::serialization(err.to_string()))?;

        let mut guard = self.entries.write().map_err(poisoned)?;
        guard.insert(message.id().clone(), encoded);
        Ok(())
    }

    async fn get(&self, id: &MessageId) -> RepositoryResult<Message> {
        let guard = self.entries.read().map_err(poisoned)?;
        let bytes = guard
            .get(id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;
        decode(id, bytes)
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Message>> {
        let guard = self.entries.read().map_err(poisoned)?;
        guard.iter().map(|(id, bytes)| decode(id, bytes)).collect()
    }

    async fn delete(&self, id: &MessageId) -> RepositoryResult<()> {
        let mut guard = self.entries.write().map_err(poisoned)?;
        guard
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))
    }
}
