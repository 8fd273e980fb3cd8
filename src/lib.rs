//! Pigeon: a message CRUD service.
//!
//! This crate stores short text messages and exposes create, read, list and
//! delete operations over HTTP.
//!
//! # Architecture
//!
//! Pigeon follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage, identifier generation
//!   and the use case itself
//! - **Adapters**: Concrete implementations of ports (in-memory storage,
//!   UUID generation, HTTP)
//!
//! # Modules
//!
//! - [`message`]: Message domain, ports, adapters and service
//! - [`http`]: HTTP adapter driving the message use case
//! - [`config`]: Server configuration
//! - [`app`]: Composition root

pub mod app;
pub mod config;
pub mod http;
pub mod message;
