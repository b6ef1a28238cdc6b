//! Application services for the guestbook message subsystem.
//!
//! Services orchestrate domain operations and coordinate between ports,
//! implementing the message-acceptance workflow.

mod persister;

#[cfg(test)]
mod persister_tests;

pub use persister::{MESSAGES_COLLECTION, MessagePersister, SaveResult};
