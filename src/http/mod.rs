//! HTTP adapter for the message use case.
//!
//! A thin driving adapter: handlers bind requests into DTOs, call the
//! [`MessageUseCase`](crate::message::ports::MessageUseCase) port, and map
//! results and error kinds onto status codes and JSON bodies.

pub mod dto;
pub mod error;
mod handlers;
mod server;

pub use error::ApiError;
pub use handlers::{SharedUseCase, router};
pub use server::{ServerError, bind, serve, shutdown_signal};
