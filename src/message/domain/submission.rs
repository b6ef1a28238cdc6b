//! The caller-owned message submission.
//!
//! A submission is the ephemeral input handed to the pipeline by an outer
//! layer (typically an HTTP handler deserialising a request body). It is
//! deliberately unvalidated at construction; the validator enforces the
//! content and author bounds before any persistence attempt.

use serde::{Deserialize, Serialize};

/// A visitor's guestbook submission: message content plus an optional
/// author name.
///
/// # Examples
///
/// ```
/// use guestbook::message::domain::MessageSubmission;
///
/// let submission = MessageSubmission::new("Lovely site!").with_author("Allan");
/// assert_eq!(submission.content(), "Lovely site!");
/// assert_eq!(submission.author(), Some("Allan"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSubmission {
    /// The message content as submitted.
    content: String,

    /// The author name as submitted, if any.
    author: Option<String>,
}

impl MessageSubmission {
    /// Creates an anonymous submission with the given content.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: None,
        }
    }

    /// Sets the author name on the submission.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Returns the submitted content, exactly as provided.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the submitted author name, if one was provided.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}
