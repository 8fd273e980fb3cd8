//! Message storage and retrieval for Pigeon.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types ([`domain::Message`], [`domain::MessageId`])
//! - **Ports**: Abstract trait interfaces ([`ports::MessageRepository`],
//!   [`ports::IdGenerator`], [`ports::MessageUseCase`])
//! - **Adapters**: Concrete implementations
//!   ([`adapters::memory::InMemoryMessageRepository`],
//!   [`adapters::identifier::UuidIdGenerator`])
//! - **Services**: Use-case orchestration ([`services::MessageService`])
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use pigeon::message::adapters::{
//!     identifier::UuidIdGenerator, memory::InMemoryMessageRepository,
//! };
//! use pigeon::message::ports::MessageUseCase;
//! use pigeon::message::services::MessageService;
//!
//! # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
//! let service = MessageService::new(
//!     Arc::new(InMemoryMessageRepository::new()),
//!     Arc::new(UuidIdGenerator::new()),
//! );
//! let created = service.create("hello".to_owned()).await.expect("create");
//! let fetched = service.get_by_id(created.id()).await.expect("fetch");
//! assert_eq!(fetched, created);
//! # });
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
