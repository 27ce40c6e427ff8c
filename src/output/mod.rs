//! Output writers for comparison reports.
//!
//! This module handles writing results in two formats:
//! - Semicolon-delimited tables (file or stdout)
//! - JSON reports for machine consumption

pub mod json;
pub mod report;

// Re-export main functions
pub use json::{build_report, read_report_json, write_report_json, DeltaReport};
pub use report::{render_report, sort_discrepancies, write_report};
