//! The resolved author of a guestbook message.
//!
//! Visitors may submit a message without naming themselves. Resolution
//! substitutes the anonymous default for absent, empty, or whitespace-only
//! input, and trims surrounding whitespace otherwise, so a resolved author
//! is never empty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved, never-empty author name.
///
/// Construct via [`Author::resolve`], which applies the anonymous default
/// and the trimming rules. Interior whitespace is preserved; only leading
/// and trailing whitespace is removed.
///
/// # Examples
///
/// ```
/// use guestbook::message::domain::Author;
///
/// assert_eq!(Author::resolve(None).as_str(), "Anonymous");
/// assert_eq!(Author::resolve(Some("  Allan  ")).as_str(), "Allan");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Author(String);

impl Author {
    /// Default author name for anonymous messages.
    pub const ANONYMOUS: &'static str = "Anonymous";

    /// Resolves an optional raw author name into a never-empty value.
    ///
    /// Absent, empty, or entirely-whitespace input resolves to
    /// [`Author::ANONYMOUS`]; any other input is trimmed of surrounding
    /// whitespace.
    #[must_use]
    pub fn resolve(author: Option<&str>) -> Self {
        match author.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => Self(trimmed.to_owned()),
            _ => Self(Self::ANONYMOUS.to_owned()),
        }
    }

    /// Returns the resolved author name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this author is the anonymous default.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.0 == Self::ANONYMOUS
    }

    /// Consumes the author, returning the inner name.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Author {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
