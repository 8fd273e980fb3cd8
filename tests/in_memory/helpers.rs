//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use pigeon::message::{
    adapters::{identifier::UuidIdGenerator, memory::InMemoryMessageRepository},
    services::MessageService,
};
use rstest::fixture;

/// Service type under test.
pub type TestService = MessageService<InMemoryMessageRepository, UuidIdGenerator>;

/// A service together with a handle on its repository, so tests can inspect
/// or tamper with stored entries.
pub struct Harness {
    /// Service under test.
    pub service: TestService,
    /// Repository shared with the service.
    pub repository: Arc<InMemoryMessageRepository>,
}

/// Provides a service over a fresh in-memory repository.
#[fixture]
pub fn harness() -> Harness {
    let repository = Arc::new(InMemoryMessageRepository::new());
    let service = MessageService::new(Arc::clone(&repository), Arc::new(UuidIdGenerator::new()));
    Harness {
        service,
        repository,
    }
}
