//! amped-export
//!
//! PDF generation for estimate reports.

pub mod canvas;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod styles;
