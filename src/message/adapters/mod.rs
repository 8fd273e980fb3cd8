//! Adapters for the message module.
//!
//! Concrete implementations of the message ports, following hexagonal
//! architecture principles:
//!
//! - [`memory::InMemoryMessageRepository`]: thread-safe in-memory storage of
//!   JSON-encoded messages
//! - [`identifier::UuidIdGenerator`]: random UUID v4 identifiers

pub mod identifier;
pub mod memory;
