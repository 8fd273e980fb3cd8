//! Domain model for stored messages.
//!
//! The domain holds plain value types with no infrastructure dependencies.
//! Serialisation derives are present because the storage adapters encode
//! messages as JSON.

mod ids;
mod message;

pub use ids::MessageId;
pub use message::Message;
