//! Validator port for guestbook submissions.
//!
//! Defines the abstract interface for rejecting malformed input before any
//! persistence attempt.

use crate::message::{domain::MessageSubmission, error::ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Port for submission validation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Be pure functions of their input (no side effects)
/// - Treat whitespace-only content as empty (trim before the emptiness
///   check)
/// - Check the author bound on the raw value; trimming is applied only for
///   storage and display
/// - Be stateless and thread-safe
pub trait SubmissionValidator: Send + Sync {
    /// Validates a submission against the configured bounds.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered, in rule order:
    /// emptiness, content length, author length.
    fn validate(&self, submission: &MessageSubmission) -> ValidationResult<()>;
}

/// Configuration for validation bounds.
///
/// # Examples
///
/// ```
/// use guestbook::message::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.max_content_chars, 1000);
/// assert_eq!(config.max_author_chars, 100);
/// ```
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Maximum trimmed content length in characters.
    pub max_content_chars: usize,
    /// Maximum raw author length in characters.
    pub max_author_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_content_chars: 1000,
            max_author_chars: 100,
        }
    }
}
