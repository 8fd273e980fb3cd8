//! Identifier newtype for stored messages.
//!
//! Message identifiers are opaque strings. The service mints them through an
//! [`IdGenerator`](crate::message::ports::IdGenerator), but callers may also
//! supply their own (route parameters, fixtures, future adapters), so no
//! format is enforced here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a stored message.
///
/// # Examples
///
/// ```
/// use pigeon::message::domain::MessageId;
///
/// let id = MessageId::new("b0c5a1d2");
/// assert_eq!(id.as_str(), "b0c5a1d2");
/// assert_eq!(id.to_string(), "b0c5a1d2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the identifier holds no characters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the wrapped string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for MessageId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for MessageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for MessageId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
