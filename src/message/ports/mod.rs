//! Port trait definitions for the guestbook message subsystem.
//!
//! Ports define the abstract interfaces that the domain requires from
//! infrastructure. Adapters implement these ports to connect the domain
//! to the document store and to observability tooling.

pub mod sink;
pub mod store;
pub mod validator;

pub use sink::ObservabilitySink;
pub use store::DocumentStore;
pub use validator::{SubmissionValidator, ValidationConfig};
