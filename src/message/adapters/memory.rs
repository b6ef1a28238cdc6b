//! In-memory implementations of the `DocumentStore` and `ObservabilitySink`
//! ports.
//!
//! Provide simple, thread-safe adapters for unit testing without a real
//! document-store client. Not suitable for production use.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::message::{
    domain::{Author, StoredMessage},
    error::StoreError,
    ports::{
        sink::ObservabilitySink,
        store::{DocumentStore, StoreResult},
    },
};

/// In-memory implementation of [`DocumentStore`].
///
/// Documents are keyed by a store-assigned UUID, mirroring a backend that
/// generates its own document keys. Thread-safe via internal [`RwLock`].
/// Suitable for unit tests only.
///
/// # Example
///
/// ```
/// use guestbook::message::adapters::memory::InMemoryDocumentStore;
///
/// let store = InMemoryDocumentStore::new();
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, HashMap<Uuid, StoredMessage>>>>,
}

impl InMemoryDocumentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the documents in the named collection, in no particular
    /// order.
    ///
    /// Returns an empty vector for an unknown collection, or if the
    /// internal lock is poisoned.
    #[must_use]
    pub fn documents(&self, collection: &str) -> Vec<StoredMessage> {
        self.collections
            .read()
            .map(|guard| {
                guard
                    .get(collection)
                    .map(|documents| documents.values().cloned().collect())
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }

    /// Returns the total number of stored documents across all collections.
    ///
    /// Returns `0` if the internal lock is poisoned, matching the fallback
    /// behaviour of an empty store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collections
            .read()
            .map(|guard| guard.values().map(HashMap::len).sum())
            .unwrap_or(0)
    }

    /// Returns `true` if no documents are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, collection: &str, document: StoredMessage) -> StoreResult<()> {
        let mut guard = self
            .collections
            .write()
            .map_err(|e| StoreError::write_failed(std::io::Error::other(e.to_string())))?;

        guard
            .entry(collection.to_owned())
            .or_default()
            .insert(Uuid::new_v4(), document);

        Ok(())
    }
}

/// A single record captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRecord {
    /// The resolved author.
    pub author: Author,
    /// The full, untruncated content.
    pub content: String,
    /// When the submission was received.
    pub received_at: DateTime<Utc>,
}

/// In-memory implementation of [`ObservabilitySink`] capturing every
/// record for later assertions.
///
/// Thread-safe via internal [`RwLock`]. Suitable for unit tests only.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    records: Arc<RwLock<Vec<SubmissionRecord>>>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the captured records in arrival order.
    ///
    /// Returns an empty vector if the internal lock is poisoned.
    #[must_use]
    pub fn records(&self) -> Vec<SubmissionRecord> {
        self.records
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Returns the number of captured records.
    ///
    /// Returns `0` if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ObservabilitySink for RecordingSink {
    fn record_submission(&self, author: &Author, content: &str, received_at: DateTime<Utc>) {
        if let Ok(mut guard) = self.records.write() {
            guard.push(SubmissionRecord {
                author: author.clone(),
                content: content.to_owned(),
                received_at,
            });
        }
    }
}
