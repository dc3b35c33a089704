//! warren-core
//!
//! Pure domain types and the weight-target progress computation.
//! No storage or UI dependency: this is the shared vocabulary of the
//! Warren system.

pub mod error;
pub mod models;
pub mod progress;
