//! Message persister service.
//!
//! The persister is the single write path of the guestbook: it normalises
//! the author, builds the storage document, and dispatches it to the
//! document store when one is configured, or to the observability sink
//! when one is not. Store failures are translated into the typed
//! [`SaveError`] taxonomy for callers.

use std::sync::Arc;

use mockable::Clock;
use tracing::{error, info, warn};

use crate::message::{
    domain::{Author, StoredMessage},
    error::SaveError,
    ports::{sink::ObservabilitySink, store::DocumentStore},
};

/// The logical collection where guestbook messages are stored.
pub const MESSAGES_COLLECTION: &str = "messages";

/// Result type for persistence operations.
pub type SaveResult<T> = Result<T, SaveError>;

/// Service persisting accepted guestbook submissions.
///
/// The store handle is optional and fixed at construction: an absent store
/// means "not configured" for the lifetime of the persister, selecting the
/// observability-only path on every call. The persister keeps no cross-call
/// state; each [`save_message`](Self::save_message) invocation is an
/// independent attempt.
///
/// # Example
///
/// ```ignore
/// use guestbook::message::services::MessagePersister;
///
/// let persister = MessagePersister::new(
///     Some(store),
///     Arc::new(LoggingSink::new()),
///     Arc::new(DefaultClock),
/// );
///
/// persister.save_message(Some("Allan"), "Lovely site!").await?;
/// ```
#[derive(Clone)]
pub struct MessagePersister<S, O, K>
where
    S: DocumentStore,
    O: ObservabilitySink,
    K: Clock + Send + Sync,
{
    store: Option<Arc<S>>,
    sink: Arc<O>,
    clock: Arc<K>,
}

impl<S, O, K> MessagePersister<S, O, K>
where
    S: DocumentStore,
    O: ObservabilitySink,
    K: Clock + Send + Sync,
{
    /// Creates a new persister.
    ///
    /// Passing `None` for the store selects mock mode permanently: accepted
    /// submissions are recorded to the sink only.
    pub fn new(store: Option<Arc<S>>, sink: Arc<O>, clock: Arc<K>) -> Self {
        if store.is_some() {
            info!("message persister initialised with a document store");
        } else {
            warn!("no document store configured - running in mock mode");
        }

        Self { store, sink, clock }
    }

    /// Persists a guestbook message.
    ///
    /// Resolves the author (absent, empty, or whitespace-only input becomes
    /// [`Author::ANONYMOUS`]) and either writes a document to the
    /// `messages` collection, awaiting the store's acknowledgement, or —
    /// when no store is configured — records the submission to the
    /// observability sink and succeeds without persisting anything.
    ///
    /// # Errors
    ///
    /// - [`SaveError::EmptyContent`] if `content` is empty or
    ///   whitespace-only after trimming; the store is never invoked.
    /// - [`SaveError::Interrupted`] if the store write was cancelled before
    ///   acknowledgement.
    /// - [`SaveError::StoreWriteFailed`] for any other store failure, with
    ///   the store's own cause preserved.
    pub async fn save_message(&self, author: Option<&str>, content: &str) -> SaveResult<()> {
        if content.trim().is_empty() {
            return Err(SaveError::EmptyContent);
        }

        let author = Author::resolve(author);

        match self.store.as_ref() {
            Some(store) => self.save_to_store(store.as_ref(), author, content).await,
            None => {
                self.sink
                    .record_submission(&author, content, self.clock.utc());
                Ok(())
            }
        }
    }

    /// Builds the storage document and dispatches it, translating store
    /// failures into [`SaveError`].
    async fn save_to_store(&self, store: &S, author: Author, content: &str) -> SaveResult<()> {
        let document = StoredMessage::new(author.clone(), content, self.clock.as_ref());

        match store.insert(MESSAGES_COLLECTION, document).await {
            Ok(()) => {
                info!(author = %author, "message saved to the document store");
                Ok(())
            }
            Err(err) => {
                error!(
                    author = %author,
                    error = %err,
                    "failed to save message to the document store",
                );
                Err(SaveError::from(err))
            }
        }
    }
}
