//! Error types for guestbook message validation and persistence.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers. The taxonomy separates the caller's
//! fault (invalid input) from persistence failures, so an embedding HTTP
//! layer can map the former to client errors and the latter to server
//! errors without string matching.

use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during submission validation.
///
/// All variants are invalid-argument failures: the caller's input broke a
/// bound and no persistence was attempted. They are never retried.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// The content is empty or whitespace-only after trimming.
    #[error("message content cannot be empty")]
    EmptyContent,

    /// The trimmed content exceeds the configured character limit.
    #[error("message content is {actual} characters, exceeds limit of {max}")]
    ContentTooLong {
        /// The trimmed content length in characters.
        actual: usize,
        /// The maximum allowed content length.
        max: usize,
    },

    /// The author name exceeds the configured character limit.
    ///
    /// Checked on the raw value; trimming is applied only for storage and
    /// display.
    #[error("author name is {actual} characters, exceeds limit of {max}")]
    AuthorTooLong {
        /// The raw author length in characters.
        actual: usize,
        /// The maximum allowed author length.
        max: usize,
    },
}

/// Errors reported by a document store when a write does not complete.
///
/// Store *unavailability* is not an error: an unconfigured store selects
/// the observability-only path before any write is attempted.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The write was cancelled before the store acknowledged it.
    #[error("store write was interrupted before acknowledgement")]
    Interrupted,

    /// The store rejected or failed the write.
    #[error("store write failed: {0}")]
    WriteFailed(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Creates a write failure from any underlying store error.
    #[must_use]
    pub fn write_failed(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::WriteFailed(Arc::new(err))
    }
}

/// Errors surfaced by [`MessagePersister::save_message`].
///
/// [`SaveError::EmptyContent`] is the caller's fault; the remaining
/// variants mean the input was acceptable but the message could not be
/// persisted. The subsystem never retries; retry policy belongs to the
/// caller.
///
/// [`MessagePersister::save_message`]: crate::message::services::MessagePersister::save_message
#[derive(Debug, Clone, Error)]
pub enum SaveError {
    /// The content was empty or whitespace-only after trimming.
    ///
    /// Re-checked by the persister even when an external validator already
    /// ran, so the store never receives a blank document.
    #[error("message content cannot be null or empty")]
    EmptyContent,

    /// The persistence attempt was cancelled mid-flight.
    ///
    /// The cancellation is re-asserted to the caller as this typed variant
    /// rather than being swallowed.
    #[error("message save operation was interrupted")]
    Interrupted,

    /// The store reported a write failure; the original cause is preserved.
    #[error("failed to save message to the document store: {0}")]
    StoreWriteFailed(Arc<dyn std::error::Error + Send + Sync>),
}

impl SaveError {
    /// Returns the underlying store cause for a write failure, if any.
    #[must_use]
    pub fn store_cause(&self) -> Option<&(dyn std::error::Error + Send + Sync)> {
        match self {
            Self::StoreWriteFailed(cause) => Some(cause.as_ref()),
            _ => None,
        }
    }
}

impl From<StoreError> for SaveError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Interrupted => Self::Interrupted,
            StoreError::WriteFailed(cause) => Self::StoreWriteFailed(cause),
        }
    }
}
