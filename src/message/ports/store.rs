//! Document store port for message persistence.
//!
//! Defines the abstract write capability the persister requires from a
//! document-oriented backend. The concrete client (connection setup,
//! authentication, transport) is an external collaborator wired in by the
//! embedding application.

use crate::message::{domain::StoredMessage, error::StoreError};
use async_trait::async_trait;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Port for writing guestbook documents to a store.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - The store assigns the document key; callers never choose one
/// - The returned future resolves only once the write is acknowledged
///   (no fire-and-forget)
/// - Documents are immutable after storage (no update operations)
/// - Concurrent inserts are handled safely
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Writes `document` as a new entry in the named logical collection,
    /// taking ownership of it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Interrupted`] if the write was cancelled
    /// before acknowledgement, or [`StoreError::WriteFailed`] carrying the
    /// store's own cause for any other failure.
    async fn insert(&self, collection: &str, document: StoredMessage) -> StoreResult<()>;
}
