//! Application services for message orchestration.

mod message;

pub use message::MessageService;
