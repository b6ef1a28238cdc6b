//! Submission validation implementation.
//!
//! This module provides the default implementation of submission
//! validation, including the individual rules and the composite validator
//! service.

pub mod rules;
pub mod service;

pub use service::DefaultSubmissionValidator;
