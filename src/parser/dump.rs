//! Parser for MySQL variable dumps.
//!
//! A dump is the output of `mysqld --version --help`: a free-form header,
//! a marker line of dashes, then one `<name> <value>` setting per line
//! until the first blank line.

use super::schema::{VariableRecord, VariableSet};
use crate::utils::config::MARKER_PREFIX;
use log::debug;

/// Scanner position within a dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Still inside the header, looking for the marker line
    BeforeMarker,
    /// Inside the settings region, consuming setting lines
    InRegion,
}

/// Parse the full text of a settings dump into a [`VariableSet`]
///
/// **Public** - main entry point for dump parsing
///
/// The relevant region starts after the first line whose leading 9
/// characters are `---------` and ends at the first blank line inside it.
/// Everything after that blank line is ignored, including further marker
/// lines. A dump with no marker, or with an empty region, yields an empty
/// set rather than an error.
///
/// # Example
/// ```ignore
/// let set = parse_dump(&std::fs::read_to_string("template.txt")?);
/// println!("{} settings", set.len());
/// ```
pub fn parse_dump(text: &str) -> VariableSet {
    let mut variables = VariableSet::new();
    let mut state = ScanState::BeforeMarker;

    for line in text.lines() {
        match state {
            ScanState::BeforeMarker => {
                if is_marker_line(line) {
                    state = ScanState::InRegion;
                }
            }
            ScanState::InRegion => {
                if line.trim().is_empty() {
                    // Region is over; the rest of the file is noise.
                    break;
                }
                if let Some((name, record)) = parse_setting_line(line) {
                    variables.insert(name, record);
                }
            }
        }
    }

    debug!("Parsed {} settings from dump", variables.len());
    variables
}

/// Check whether a line opens the settings region
///
/// **Private** - internal helper for parse_dump
fn is_marker_line(line: &str) -> bool {
    line.starts_with(MARKER_PREFIX)
}

/// Split one setting line into name and value
///
/// **Private** - internal helper for parse_dump
///
/// The name is the first whitespace-delimited token; the value is the
/// remainder with the name prefix removed and surrounding whitespace
/// trimmed. Internal whitespace in values survives. Settings without a
/// value column get an empty value.
fn parse_setting_line(line: &str) -> Option<(String, VariableRecord)> {
    let line = line.trim_start();
    let name = line.split_whitespace().next()?;
    let value = line
        .strip_prefix(name)
        .unwrap_or("")
        .trim()
        .to_string();

    Some((name.to_string(), VariableRecord { value }))
}
