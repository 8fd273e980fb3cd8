//! The message entity.

use super::MessageId;
use serde::{Deserialize, Serialize};

/// An immutable text message.
///
/// Messages carry no behaviour beyond their two fields: the content is an
/// opaque string and is never validated or rewritten. Once stored a message
/// is never updated; it is only read or deleted.
///
/// # Examples
///
/// ```
/// use pigeon::message::domain::{Message, MessageId};
///
/// let message = Message::new(MessageId::new("id-1"), "hello");
/// assert_eq!(message.id().as_str(), "id-1");
/// assert_eq!(message.content(), "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    content: String,
}

impl Message {
    /// Creates a message from an identifier and its content.
    #[must_use]
    pub fn new(id: MessageId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the message content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consumes the message and returns its identifier and content.
    #[must_use]
    pub fn into_parts(self) -> (MessageId, String) {
        (self.id, self.content)
    }
}
