//! Adapters for the guestbook message module.
//!
//! This module provides concrete implementations of the message ports,
//! following hexagonal architecture principles. Adapters handle all
//! infrastructure concerns while the domain remains pure.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryDocumentStore`]: Thread-safe in-memory document
//!   storage for unit testing
//! - [`memory::RecordingSink`]: In-memory observability sink for unit
//!   testing
//! - [`logging::LoggingSink`]: Production observability sink emitting
//!   structured `tracing` events
//!
//! The concrete document-store client (connection setup, authentication,
//! transport) is an external collaborator; embedding applications adapt it
//! to [`DocumentStore`] themselves.
//!
//! [`DocumentStore`]: crate::message::ports::store::DocumentStore

pub mod logging;
pub mod memory;
