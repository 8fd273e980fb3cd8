//! Request and response shapes for the HTTP adapter.
//!
//! DTOs are kept separate from [`Message`] so the wire format can change
//! without touching the domain.

use serde::{Deserialize, Serialize};

use crate::message::domain::Message;

/// Body of `POST /message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    /// Message content; any string, including empty, is accepted.
    pub content: String,
}

/// Body returned by `POST /message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMessageResponse {
    /// Identifier assigned to the new message.
    pub id: String,
}

impl From<&Message> for CreateMessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id().to_string(),
        }
    }
}

/// A message as returned by `GET /message/{id}` and `GET /messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message identifier.
    pub id: String,
    /// Message content.
    pub content: String,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        let (id, content) = message.into_parts();
        Self {
            id: id.into_inner(),
            content,
        }
    }
}

/// Converts a list of messages into response DTOs, preserving order.
#[must_use]
pub fn messages_response(messages: Vec<Message>) -> Vec<MessageResponse> {
    messages.into_iter().map(MessageResponse::from).collect()
}

/// JSON error body: `{"error": "<kind>: <detail>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error description, prefixed with the taxonomy tag.
    pub error: String,
}
