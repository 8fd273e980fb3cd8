//! Composition root wiring adapters into the message use case.

use std::sync::Arc;

use crate::http::SharedUseCase;
use crate::message::{
    adapters::{identifier::UuidIdGenerator, memory::InMemoryMessageRepository},
    services::MessageService,
};

/// Service type backed by in-memory storage and UUID identifiers.
pub type InMemoryMessageService = MessageService<InMemoryMessageRepository, UuidIdGenerator>;

/// Builds a message service over a fresh in-memory repository.
#[must_use]
pub fn in_memory_service() -> InMemoryMessageService {
    MessageService::new(
        Arc::new(InMemoryMessageRepository::new()),
        Arc::new(UuidIdGenerator::new()),
    )
}

/// Builds the use case handed to the HTTP adapter.
#[must_use]
pub fn in_memory_use_case() -> SharedUseCase {
    Arc::new(in_memory_service())
}
