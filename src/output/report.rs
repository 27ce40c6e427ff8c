//! Delimited text report writer.
//!
//! Serializes the annotated discrepancy list as a semicolon-delimited
//! table, sorted by category then setting name. Fields are emitted
//! verbatim; a value that itself contains the delimiter makes the row
//! ambiguous, which is a documented limitation of the fixed format.

use crate::diff::Discrepancy;
use crate::utils::config::{FIELD_DELIMITER, REPORT_HEADER};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Sort discrepancies into report order
///
/// **Public** - shared by the delimited and JSON writers
///
/// Ascending lexicographic by `(category, key)`; keys break category ties.
pub fn sort_discrepancies(differences: &mut [Discrepancy]) {
    differences.sort_by(|a, b| (&a.category, &a.key).cmp(&(&b.category, &b.key)));
}

/// Render the full report as a string
///
/// **Public** - main entry point for report rendering
///
/// The header row comes first, then one row per discrepancy in sorted
/// order. An empty discrepancy list renders as just the header.
pub fn render_report(differences: &[Discrepancy]) -> String {
    let mut sorted = differences.to_vec();
    sort_discrepancies(&mut sorted);

    let mut out = String::with_capacity(REPORT_HEADER.len() + sorted.len() * 48);
    out.push_str(REPORT_HEADER);
    out.push('\n');

    for item in &sorted {
        out.push_str(&render_row(item));
        out.push('\n');
    }

    out
}

/// Render one report row
///
/// **Private** - internal helper for render_report
fn render_row(item: &Discrepancy) -> String {
    let d = FIELD_DELIMITER;
    format!(
        "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
        item.category, item.key, item.cnf_param_name, item.value_new, item.value_template,
        item.unit
    )
}

/// Write the report to a file, or to stdout when no path is given
///
/// **Public** - used by the compare command
///
/// The report is rendered completely before the first byte is written, so
/// a failure never leaves a partial file behind.
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path or existing directory
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_report(
    differences: &[Discrepancy],
    destination: Option<&Path>,
) -> Result<(), OutputError> {
    let rendered = render_report(differences);

    match destination {
        Some(path) => {
            validate_output_path(path)?;
            info!("Writing report to: {}", path.display());
            fs::write(path, rendered).map_err(OutputError::WriteFailed)?;
        }
        None => {
            debug!("Writing report to stdout");
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(rendered.as_bytes())
                .map_err(OutputError::WriteFailed)?;
        }
    }

    Ok(())
}

/// Validate that the output path is usable
///
/// **Private** - internal validation
pub(crate) fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotated(key: &str, category: &str) -> Discrepancy {
        Discrepancy {
            key: key.to_string(),
            value_new: "1".to_string(),
            value_template: "2".to_string(),
            cnf_param_name: String::new(),
            unit: String::new(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_header_only_for_empty_report() {
        assert_eq!(render_report(&[]), format!("{REPORT_HEADER}\n"));
    }

    #[test]
    fn test_rows_sorted_by_category_then_key() {
        let differences = vec![
            annotated("zeta", "Network"),
            annotated("alpha", "Network"),
            annotated("beta", "Buffers"),
            annotated("omega", ""),
        ];

        let report = render_report(&differences);
        let keys: Vec<&str> = report
            .lines()
            .skip(1)
            .map(|l| l.split(FIELD_DELIMITER).nth(1).unwrap())
            .collect();
        assert_eq!(keys, vec!["omega", "beta", "alpha", "zeta"]);
    }

    #[test]
    fn test_fields_emitted_verbatim() {
        let mut item = annotated("key1", "Network");
        item.value_new = "a; b".to_string();

        let report = render_report(&[item]);
        assert!(report.contains("Network;key1;;a; b;2;"));
    }

    #[test]
    fn test_validate_output_path_empty() {
        assert!(validate_output_path(Path::new("")).is_err());
    }
}
