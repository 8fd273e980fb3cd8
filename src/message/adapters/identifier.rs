//! UUID-backed identifier generation.

use uuid::Uuid;

use crate::message::{domain::MessageId, ports::IdGenerator};

/// Generates random UUID v4 message identifiers in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> MessageId {
        MessageId::new(Uuid::new_v4().to_string())
    }
}
