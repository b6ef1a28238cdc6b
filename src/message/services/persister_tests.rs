//! Tests for the message persister service.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockable::DefaultClock;
use mockall::mock;
use rstest::rstest;

use super::{MESSAGES_COLLECTION, MessagePersister};
use crate::message::{
    adapters::memory::{InMemoryDocumentStore, RecordingSink},
    domain::{Author, StoredMessage},
    error::{SaveError, StoreError},
    ports::store::{DocumentStore, StoreResult},
};

mock! {
    Store {}

    #[async_trait]
    impl DocumentStore for Store {
        async fn insert(&self, collection: &str, document: StoredMessage) -> StoreResult<()>;
    }
}

fn mock_mode_persister(
    sink: Arc<RecordingSink>,
) -> MessagePersister<InMemoryDocumentStore, RecordingSink, DefaultClock> {
    MessagePersister::new(None, sink, Arc::new(DefaultClock))
}

fn store_mode_persister(
    store: Arc<InMemoryDocumentStore>,
    sink: Arc<RecordingSink>,
) -> MessagePersister<InMemoryDocumentStore, RecordingSink, DefaultClock> {
    MessagePersister::new(Some(store), sink, Arc::new(DefaultClock))
}

// ============================================================================
// Defence-in-depth content check
// ============================================================================

#[rstest]
#[case::empty("")]
#[case::spaces("   ")]
#[case::tabs_and_newlines(" \t\n ")]
#[tokio::test]
async fn save_message_rejects_blank_content_without_touching_store(#[case] content: &str) {
    let store = Arc::new(InMemoryDocumentStore::new());
    let sink = Arc::new(RecordingSink::new());
    let persister = store_mode_persister(Arc::clone(&store), Arc::clone(&sink));

    let result = persister.save_message(Some("Allan"), content).await;

    assert!(matches!(result, Err(SaveError::EmptyContent)));
    assert!(store.is_empty());
    assert!(sink.is_empty());
}

#[tokio::test]
async fn save_message_rejects_blank_content_with_mocked_store() {
    let mut store = MockStore::new();
    store.expect_insert().times(0);
    let persister = MessagePersister::new(
        Some(Arc::new(store)),
        Arc::new(RecordingSink::new()),
        Arc::new(DefaultClock),
    );

    let result = persister.save_message(None, "\t  \n").await;

    assert!(matches!(result, Err(SaveError::EmptyContent)));
}

// ============================================================================
// Mock path (store unavailable)
// ============================================================================

#[tokio::test]
async fn mock_path_succeeds_and_records_to_sink_only() {
    let sink = Arc::new(RecordingSink::new());
    let persister = mock_mode_persister(Arc::clone(&sink));
    let before = Utc::now();

    persister
        .save_message(Some("Allan"), "Lovely site!")
        .await
        .expect("mock path should succeed");

    let records = sink.records();
    assert_eq!(records.len(), 1);
    let record = records.first().expect("one record");
    assert_eq!(record.author.as_str(), "Allan");
    assert_eq!(record.content, "Lovely site!");
    assert!(record.received_at >= before);
    assert!(record.received_at <= Utc::now());
}

#[rstest]
#[case::absent(None)]
#[case::empty(Some(""))]
#[case::whitespace_only(Some("   \t"))]
#[tokio::test]
async fn mock_path_resolves_missing_author_to_anonymous(#[case] author: Option<&str>) {
    let sink = Arc::new(RecordingSink::new());
    let persister = mock_mode_persister(Arc::clone(&sink));

    persister
        .save_message(author, "hi")
        .await
        .expect("mock path should succeed");

    let records = sink.records();
    let record = records.first().expect("one record");
    assert_eq!(record.author.as_str(), Author::ANONYMOUS);
}

#[tokio::test]
async fn mock_path_records_full_content_untruncated() {
    let sink = Arc::new(RecordingSink::new());
    let persister = mock_mode_persister(Arc::clone(&sink));
    let content = "x".repeat(400);

    persister
        .save_message(Some("Allan"), &content)
        .await
        .expect("mock path should succeed");

    let records = sink.records();
    let record = records.first().expect("one record");
    assert_eq!(record.content, content);
}

#[tokio::test]
async fn mock_path_never_fails_for_store_unavailability() {
    // Beyond the emptiness check the mock path accepts anything, including
    // content past the validator's length bound.
    let sink = Arc::new(RecordingSink::new());
    let persister = mock_mode_persister(Arc::clone(&sink));

    let result = persister.save_message(Some("Allan"), &"x".repeat(5000)).await;

    assert!(result.is_ok());
}

// ============================================================================
// Store path
// ============================================================================

#[tokio::test]
async fn store_path_builds_complete_document() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let sink = Arc::new(RecordingSink::new());
    let persister = store_mode_persister(Arc::clone(&store), Arc::clone(&sink));
    let before = Utc::now();

    persister
        .save_message(Some("  Allan  "), "Lovely site!")
        .await
        .expect("store path should succeed");

    let documents = store.documents(MESSAGES_COLLECTION);
    assert_eq!(documents.len(), 1);
    let document = documents.first().expect("one document");
    assert_eq!(document.author().as_str(), "Allan");
    assert_eq!(document.content(), "Lovely site!");
    assert!(!document.message_id().as_ref().is_nil());
    assert!(document.created_at() >= before);
    assert!(document.created_at() <= Utc::now());
    assert!(sink.is_empty());
}

#[tokio::test]
async fn store_path_preserves_original_content_untruncated() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let persister = store_mode_persister(Arc::clone(&store), Arc::new(RecordingSink::new()));
    let content = "y".repeat(900);

    persister
        .save_message(None, &content)
        .await
        .expect("store path should succeed");

    let documents = store.documents(MESSAGES_COLLECTION);
    let document = documents.first().expect("one document");
    assert_eq!(document.content(), content);
    assert_eq!(document.author().as_str(), Author::ANONYMOUS);
}

#[tokio::test]
async fn repeated_saves_produce_distinct_documents() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let persister = store_mode_persister(Arc::clone(&store), Arc::new(RecordingSink::new()));

    for _ in 0..2 {
        persister
            .save_message(Some("Allan"), "hi")
            .await
            .expect("store path should succeed");
    }

    let documents = store.documents(MESSAGES_COLLECTION);
    assert_eq!(documents.len(), 2);
    let unique_ids: HashSet<_> = documents.iter().map(StoredMessage::message_id).collect();
    assert_eq!(unique_ids.len(), 2);
}

#[tokio::test]
async fn store_path_writes_to_the_messages_collection() {
    let mut store = MockStore::new();
    store
        .expect_insert()
        .withf(|collection, _| collection == MESSAGES_COLLECTION)
        .times(1)
        .returning(|_, _| Ok(()));
    let persister = MessagePersister::new(
        Some(Arc::new(store)),
        Arc::new(RecordingSink::new()),
        Arc::new(DefaultClock),
    );

    persister
        .save_message(Some("Allan"), "hi")
        .await
        .expect("store path should succeed");
}

// ============================================================================
// Failure translation
// ============================================================================

#[tokio::test]
async fn write_failure_surfaces_as_store_write_failed_with_cause() {
    let mut store = MockStore::new();
    store
        .expect_insert()
        .returning(|_, _| Err(StoreError::write_failed(std::io::Error::other("socket reset"))));
    let persister = MessagePersister::new(
        Some(Arc::new(store)),
        Arc::new(RecordingSink::new()),
        Arc::new(DefaultClock),
    );

    let err = persister
        .save_message(Some("Allan"), "hi")
        .await
        .expect_err("write should fail");

    match &err {
        SaveError::StoreWriteFailed(cause) => {
            assert_eq!(cause.to_string(), "socket reset");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.store_cause().is_some());
}

#[tokio::test]
async fn interrupted_write_surfaces_as_interrupted() {
    let mut store = MockStore::new();
    store
        .expect_insert()
        .returning(|_, _| Err(StoreError::Interrupted));
    let persister = MessagePersister::new(
        Some(Arc::new(store)),
        Arc::new(RecordingSink::new()),
        Arc::new(DefaultClock),
    );

    let err = persister
        .save_message(Some("Allan"), "hi")
        .await
        .expect_err("write should fail");

    assert!(matches!(err, SaveError::Interrupted));
    assert!(err.store_cause().is_none());
}
