//! Individual validation rule implementations.
//!
//! Each rule is a pure function that validates one aspect of a submission.
//! Rules return `Ok(())` on success or a specific `ValidationError` on
//! failure. Lengths are measured in characters, not bytes.

use crate::message::{
    domain::MessageSubmission, error::ValidationError, ports::validator::ValidationConfig,
};

/// Validates that the content is not empty or whitespace-only.
///
/// Trimming is mandatory before the emptiness check: content consisting
/// solely of spaces, tabs, or newlines is rejected.
///
/// # Errors
///
/// Returns `ValidationError::EmptyContent` if the trimmed content has zero
/// length.
pub fn validate_content_not_blank(submission: &MessageSubmission) -> Result<(), ValidationError> {
    if submission.content().trim().is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    Ok(())
}

/// Validates that the trimmed content fits the configured bound.
///
/// # Errors
///
/// Returns `ValidationError::ContentTooLong` if the trimmed content exceeds
/// `config.max_content_chars` characters.
pub fn validate_content_length(
    submission: &MessageSubmission,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let actual = submission.content().trim().chars().count();
    if actual > config.max_content_chars {
        return Err(ValidationError::ContentTooLong {
            actual,
            max: config.max_content_chars,
        });
    }
    Ok(())
}

/// Validates that the author name, when present, fits the configured bound.
///
/// The bound is checked on the raw value; trimming is applied only for
/// storage and display.
///
/// # Errors
///
/// Returns `ValidationError::AuthorTooLong` if the raw author exceeds
/// `config.max_author_chars` characters.
pub fn validate_author_length(
    submission: &MessageSubmission,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    if let Some(author) = submission.author() {
        let actual = author.chars().count();
        if actual > config.max_author_chars {
            return Err(ValidationError::AuthorTooLong {
                actual,
                max: config.max_author_chars,
            });
        }
    }
    Ok(())
}
