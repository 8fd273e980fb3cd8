//! Identifier generation port.

use crate::message::domain::MessageId;

/// Source of fresh message identifiers.
///
/// The service asks the generator for an identifier on every create call.
/// Implementations must return a value that has not been handed out before.
pub trait IdGenerator: Send + Sync {
    /// Returns a new, unique message identifier.
    fn generate(&self) -> MessageId;
}
