//! The write-once document handed to the document store.
//!
//! A stored message is built by the persister immediately before dispatch
//! and never mutated afterwards; the subsystem has no update or delete
//! operations.

use super::{Author, MessageId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A guestbook message as persisted in the document store.
///
/// # Invariants
///
/// - `author` is never empty (guaranteed by [`Author`] resolution)
/// - `content` is the original submitted value, never truncated
/// - `created_at` is stamped from the injected clock at construction
/// - `message_id` is freshly generated and unique per document, independent
///   of whatever key the store assigns
///
/// # Serialisation
///
/// Fields serialise under their wire names, matching the store's document
/// schema:
///
/// ```json
/// {
///   "author": "Allan",
///   "content": "Lovely site!",
///   "createdAt": "2025-01-01T00:00:00Z",
///   "messageId": "7f8d9c64-..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMessage {
    /// The resolved author, never empty.
    author: Author,

    /// The original message content.
    content: String,

    /// When the document was built for persistence.
    created_at: DateTime<Utc>,

    /// The freshly generated message identifier.
    message_id: MessageId,
}

impl StoredMessage {
    /// Builds a new document with a fresh identifier and a creation
    /// timestamp taken from `clock`.
    ///
    /// # Examples
    ///
    /// ```
    /// use guestbook::message::domain::{Author, StoredMessage};
    /// use mockable::DefaultClock;
    ///
    /// let clock = DefaultClock;
    /// let message = StoredMessage::new(Author::resolve(Some("Allan")), "Hello!", &clock);
    /// assert_eq!(message.author().as_str(), "Allan");
    /// assert!(!message.message_id().as_ref().is_nil());
    /// ```
    #[must_use]
    pub fn new(author: Author, content: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            author,
            content: content.into(),
            created_at: clock.utc(),
            message_id: MessageId::new(),
        }
    }

    /// Returns the resolved author.
    #[must_use]
    pub const fn author(&self) -> &Author {
        &self.author
    }

    /// Returns the original message content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn message_id(&self) -> MessageId {
        self.message_id
    }
}
