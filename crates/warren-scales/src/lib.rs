//! warren-scales
//!
//! Species-specific welfare assessment scales. Pure data plus the scoring
//! engine: scale definitions (questions, scored answer options,
//! interpretation bands), the interactive answer walk, and the algorithm
//! that turns a completed walk into a persisted result payload.

pub mod catalog;
pub mod error;
pub mod scoring;
pub mod species;
pub mod walk;

pub use catalog::ScaleCatalog;
pub use error::ScaleError;
