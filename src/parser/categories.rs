//! Loader for the semicolon-delimited category side table.
//!
//! Each row maps a variable name to its my.cnf parameter name plus an
//! optional unit and category, e.g.:
//!
//! ```text
//! connect-timeout;connect_timeout;s;Network
//! ```

use super::schema::{CategoryRecord, CategoryTable};
use crate::utils::config::FIELD_DELIMITER;
use crate::utils::error::CategoryError;
use log::debug;

/// Parse the full text of a category table
///
/// **Public** - main entry point for category loading
///
/// Blank lines are skipped. Each remaining line must carry at least the
/// variable name and the cnf parameter name; the unit and category fields
/// are independently optional and extra fields are ignored. Rows missing
/// the mandatory fields abort the load with the offending 1-based line
/// number.
///
/// # Errors
/// * `CategoryError::MissingParamName` - fewer than two fields on a row
/// * `CategoryError::EmptyName` - row with an empty variable name
pub fn parse_categories(text: &str) -> Result<CategoryTable, CategoryError> {
    let mut table = CategoryTable::new();

    for (index, raw_line) in text.lines().enumerate() {
        // Tolerate CRLF input
        let line = raw_line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let (name, record) = parse_category_row(line, index + 1)?;
        table.insert(name, record);
    }

    debug!("Loaded {} category rows", table.len());
    Ok(table)
}

/// Parse one table row into its key and record
///
/// **Private** - internal helper for parse_categories
fn parse_category_row(line: &str, row: usize) -> Result<(String, CategoryRecord), CategoryError> {
    let mut fields = line.split(FIELD_DELIMITER);

    let name = fields
        .next()
        .filter(|f| !f.is_empty())
        .ok_or(CategoryError::EmptyName { line: row })?;

    let cnf_param_name = fields
        .next()
        .ok_or(CategoryError::MissingParamName { line: row })?;

    let unit = fields.next().map(str::to_string);
    let category = fields.next().map(str::to_string);

    Ok((
        name.to_string(),
        CategoryRecord {
            cnf_param_name: cnf_param_name.to_string(),
            unit,
            category,
        },
    ))
}
