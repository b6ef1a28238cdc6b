//! Guestbook: message acceptance and persistence for a portfolio site.
//!
//! This crate provides the core pipeline that accepts visitor messages,
//! validates them, normalises the author, and persists them to a document
//! store — degrading to a log-only observability path when no store is
//! configured.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store,
//!   logging sink)
//!
//! # Modules
//!
//! - [`message`]: Submission validation and the persistence pipeline

pub mod message;
