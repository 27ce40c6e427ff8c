//! JSON report writer.
//!
//! Alternative machine-readable output for toolchains that post-process
//! the comparison, written pretty-printed with the same row order as the
//! delimited report.

use super::report::{sort_discrepancies, validate_output_path};
use crate::diff::Discrepancy;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Machine-readable comparison report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeltaReport {
    /// Schema version for the report format
    pub version: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    /// Path of the new settings dump
    pub new_source: String,

    /// Path of the template settings dump
    pub template_source: String,

    /// Annotated discrepancies in report order
    pub discrepancies: Vec<Discrepancy>,
}

/// Assemble a report from annotated discrepancies
///
/// **Public** - used by the compare command for JSON output
pub fn build_report(
    differences: Vec<Discrepancy>,
    new_source: &str,
    template_source: &str,
) -> DeltaReport {
    let mut discrepancies = differences;
    sort_discrepancies(&mut discrepancies);

    DeltaReport {
        version: SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        new_source: new_source.to_string(),
        template_source: template_source.to_string(),
        discrepancies,
    }
}

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path or existing directory
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn write_report_json(
    report: &DeltaReport,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    validate_output_path(output_path)?;
    info!("Writing JSON report to: {}", output_path.display());

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

/// Read a report back from a JSON file
///
/// **Public** - useful for validation and testing
pub fn read_report_json(input_path: impl AsRef<Path>) -> Result<DeltaReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading JSON report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report: DeltaReport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    Ok(report)
}
