//! warren-export
//!
//! Report projection: turns stored assessment records and weight history
//! into the flat rows, detail tables, and narrative text that exports
//! consume. Document formats stay thin here: CSV rows and a Markdown
//! report rendered through a Tera template.

pub mod csv;
pub mod error;
pub mod projection;
pub mod render;
