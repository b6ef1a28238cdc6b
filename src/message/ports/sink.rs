//! Observability sink port for the store-unavailable path.
//!
//! When no document store is configured, accepted submissions are recorded
//! to a sink for observability only. Nothing is queryable afterwards, and
//! no identifier is generated for the submission.

use crate::message::domain::Author;
use chrono::{DateTime, Utc};

/// Port for recording submissions that were accepted without a store.
///
/// Implementations receive the full, untruncated content; any truncation
/// for display is the implementation's own concern.
pub trait ObservabilitySink: Send + Sync {
    /// Records an accepted submission: the resolved author, the full
    /// content, and the time the submission was received.
    fn record_submission(&self, author: &Author, content: &str, received_at: DateTime<Utc>);
}
