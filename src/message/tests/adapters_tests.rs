//! Unit tests for the in-memory adapters.

use crate::message::{
    adapters::memory::{InMemoryDocumentStore, RecordingSink},
    domain::{Author, StoredMessage},
    ports::{sink::ObservabilitySink, store::DocumentStore},
};
use chrono::Utc;
use mockable::DefaultClock;

fn document(content: &str) -> StoredMessage {
    StoredMessage::new(Author::resolve(Some("Allan")), content, &DefaultClock)
}

// ============================================================================
// InMemoryDocumentStore tests
// ============================================================================

#[test]
fn store_starts_empty() {
    let store = InMemoryDocumentStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.documents("messages").is_empty());
}

#[tokio::test]
async fn insert_stores_the_document() {
    let store = InMemoryDocumentStore::new();

    store
        .insert("messages", document("hi"))
        .await
        .expect("insert should succeed");

    assert_eq!(store.len(), 1);
    let documents = store.documents("messages");
    assert_eq!(documents.len(), 1);
    assert_eq!(
        documents.first().map(StoredMessage::content),
        Some("hi")
    );
}

#[tokio::test]
async fn collections_are_isolated() {
    let store = InMemoryDocumentStore::new();

    store
        .insert("messages", document("hi"))
        .await
        .expect("insert should succeed");

    assert!(store.documents("other").is_empty());
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn clones_share_the_same_storage() {
    let store = InMemoryDocumentStore::new();
    let clone = store.clone();

    clone
        .insert("messages", document("hi"))
        .await
        .expect("insert should succeed");

    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn identical_documents_are_stored_separately() {
    // The store assigns its own keys, so equal payloads never collide.
    let store = InMemoryDocumentStore::new();

    let shared = document("hi");
    store
        .insert("messages", shared.clone())
        .await
        .expect("insert should succeed");
    store
        .insert("messages", shared)
        .await
        .expect("insert should succeed");

    assert_eq!(store.documents("messages").len(), 2);
}

// ============================================================================
// RecordingSink tests
// ============================================================================

#[test]
fn sink_starts_empty() {
    let sink = RecordingSink::new();
    assert!(sink.is_empty());
    assert_eq!(sink.len(), 0);
}

#[test]
fn sink_captures_records_in_arrival_order() {
    let sink = RecordingSink::new();
    let received_at = Utc::now();

    sink.record_submission(&Author::resolve(Some("Allan")), "first", received_at);
    sink.record_submission(&Author::resolve(None), "second", received_at);

    let records = sink.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records.first().map(|r| r.content.as_str()), Some("first"));
    assert_eq!(records.get(1).map(|r| r.content.as_str()), Some("second"));
    assert_eq!(
        records.get(1).map(|r| r.author.as_str()),
        Some(Author::ANONYMOUS)
    );
}

#[test]
fn sink_clones_share_the_same_records() {
    let sink = RecordingSink::new();
    let clone = sink.clone();

    clone.record_submission(&Author::resolve(None), "hi", Utc::now());

    assert_eq!(sink.len(), 1);
}
