//! Validation service implementation.
//!
//! Provides the default implementation of the `SubmissionValidator` port,
//! applying the individual rules in order.

use crate::message::{
    domain::MessageSubmission,
    ports::validator::{SubmissionValidator, ValidationConfig, ValidationResult},
    validation::rules,
};

/// Default implementation of the submission validator.
///
/// Applies the rules in order — emptiness, content length, author length —
/// returning the first failure. The three failure kinds are exhaustively
/// matchable by callers, so there is no combined-error variant.
///
/// # Examples
///
/// ```
/// use guestbook::message::domain::MessageSubmission;
/// use guestbook::message::ports::validator::SubmissionValidator;
/// use guestbook::message::validation::service::DefaultSubmissionValidator;
///
/// let validator = DefaultSubmissionValidator::new();
/// let submission = MessageSubmission::new("Lovely site!").with_author("Allan");
/// assert!(validator.validate(&submission).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DefaultSubmissionValidator {
    config: ValidationConfig,
}

impl DefaultSubmissionValidator {
    /// Creates a new validator with default bounds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// Creates a new validator with custom bounds.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl Default for DefaultSubmissionValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionValidator for DefaultSubmissionValidator {
    fn validate(&self, submission: &MessageSubmission) -> ValidationResult<()> {
        rules::validate_content_not_blank(submission)?;
        rules::validate_content_length(submission, &self.config)?;
        rules::validate_author_length(submission, &self.config)?;
        Ok(())
    }
}
