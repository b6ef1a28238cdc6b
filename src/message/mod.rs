//! Guestbook message validation and persistence.
//!
//! This module implements the message-acceptance pipeline: input
//! validation, author normalisation, document construction, store
//! dispatch, and failure translation.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::MessageSubmission`],
//!   [`domain::Author`], [`domain::StoredMessage`], etc.)
//! - **Ports**: Abstract trait interfaces
//!   ([`ports::store::DocumentStore`], [`ports::validator::SubmissionValidator`],
//!   [`ports::sink::ObservabilitySink`])
//! - **Adapters**: Concrete implementations
//!   ([`adapters::memory::InMemoryDocumentStore`], [`adapters::logging::LoggingSink`])
//! - **Validation**: Business rule enforcement at the ingestion boundary
//! - **Services**: The [`services::MessagePersister`] orchestrating the
//!   write path
//!
//! # Example
//!
//! ```
//! use guestbook::message::domain::MessageSubmission;
//! use guestbook::message::ports::validator::SubmissionValidator;
//! use guestbook::message::validation::service::DefaultSubmissionValidator;
//!
//! let submission = MessageSubmission::new("Hello from the guestbook!").with_author("Allan");
//!
//! let validator = DefaultSubmissionValidator::new();
//! validator.validate(&submission).expect("validation should pass");
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
