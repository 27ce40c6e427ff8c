//! Configuration and constants for the CLI.

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// A dump line whose first 9 characters match this prefix opens the
/// relevant settings region
pub const MARKER_PREFIX: &str = "---------";

/// Placeholder emitted when a setting exists on only one side of the
/// comparison
pub const MISSING_SETTING: &str = "setting not provided";

/// Field separator for the category table and the delimited report
pub const FIELD_DELIMITER: char = ';';

/// Header row of the delimited report
pub const REPORT_HEADER: &str = "Category;Setting;CNF Param Name;New Value;Template Value;Unit";
