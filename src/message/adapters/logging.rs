//! Tracing-backed implementation of the `ObservabilitySink` port.
//!
//! The production sink for mock mode: each accepted submission becomes one
//! structured log event. The content excerpt in the event is truncated for
//! display only; the value handed to the sink is never modified.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::message::{domain::Author, ports::sink::ObservabilitySink};

/// Maximum number of content characters included in a log event.
const DISPLAY_EXCERPT_CHARS: usize = 100;

/// Observability sink that emits one `tracing` event per recorded
/// submission.
///
/// Used when no document store is configured, so accepted submissions
/// remain visible to operators even though nothing is persisted.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl LoggingSink {
    /// Creates a new logging sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ObservabilitySink for LoggingSink {
    fn record_submission(&self, author: &Author, content: &str, received_at: DateTime<Utc>) {
        info!(
            author = %author,
            content = %display_excerpt(content),
            %received_at,
            "mock mode - message received without a configured store",
        );
    }
}

/// Truncates content to [`DISPLAY_EXCERPT_CHARS`] characters for display.
///
/// Counts characters rather than bytes so multi-byte content is never cut
/// mid-character.
fn display_excerpt(content: &str) -> Cow<'_, str> {
    if content.chars().count() <= DISPLAY_EXCERPT_CHARS {
        Cow::Borrowed(content)
    } else {
        let mut excerpt: String = content.chars().take(DISPLAY_EXCERPT_CHARS).collect();
        excerpt.push_str("...");
        Cow::Owned(excerpt)
    }
}
