//! amped-core
//!
//! Pure domain types for estimate reports: records, categories and their
//! column tables, trade branding, and the submission normalizer that turns
//! raw form/JSON fields into ordered record sequences.
//! No HTTP or PDF dependency. This is the shared vocabulary of the AMPED system.

pub mod error;
pub mod models;
pub mod submission;
