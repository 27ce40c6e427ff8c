//! Compare command implementation.
//! Orchestrates the parse -> diff -> annotate -> report pipeline.

use super::models::CompareArgs;
use crate::diff::{compare_variable_sets, merge_categories};
use crate::output::{build_report, write_report, write_report_json};
use crate::parser::schema::CategoryTable;
use crate::parser::{parse_categories, parse_dump};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Execute the compare command
///
/// Reads both dumps (and the category table when given), compares them
/// and writes the report. Any read or parse failure aborts before a
/// single report byte is written.
pub fn execute_compare(args: CompareArgs) -> Result<()> {
    // Step 1: Load and parse both dumps
    let new_set = parse_dump(&read_input(&args.new_settings, "new settings")?);
    let template_set = parse_dump(&read_input(&args.template_settings, "template settings")?);

    info!(
        "Parsed {} new settings and {} template settings",
        new_set.len(),
        template_set.len()
    );

    // Step 2: Load the category table when supplied
    let categories: Option<CategoryTable> = match &args.categories {
        Some(path) => {
            let text = read_input(path, "category table")?;
            let table = parse_categories(&text)
                .with_context(|| format!("Malformed category table {}", path.display()))?;
            Some(table)
        }
        None => None,
    };

    // Step 3: Compare and annotate
    let differences = compare_variable_sets(&new_set, &template_set);
    let annotated = merge_categories(differences, categories.as_ref());

    info!("Reporting {} discrepancies", annotated.len());

    // Step 4: Write the report
    if args.json {
        let output = args
            .output
            .as_deref()
            .context("JSON reports require --output")?;
        let report = build_report(
            annotated,
            &args.new_settings.display().to_string(),
            &args.template_settings.display().to_string(),
        );
        write_report_json(&report, output).context("Failed to write JSON report")?;
    } else {
        write_report(&annotated, args.output.as_deref()).context("Failed to write report")?;
    }

    Ok(())
}

/// Read one input file completely
///
/// **Private** - internal helper for execute_compare
fn read_input(path: &Path, label: &str) -> Result<String> {
    debug!("Reading {} from: {}", label, path.display());
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file {}", label, path.display()))
}
