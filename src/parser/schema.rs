//! Data model for parsed settings dumps and category tables.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single parsed setting value
///
/// Values are kept verbatim: no normalization of case or whitespace,
/// so `16M` and `16777216` compare unequal by design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRecord {
    /// Raw value text with the variable-name prefix and surrounding
    /// whitespace removed
    pub value: String,
}

/// All settings of one dump, keyed by variable name.
///
/// Duplicate names within a dump resolve last-write-wins.
pub type VariableSet = HashMap<String, VariableRecord>;

/// Display/grouping metadata for one variable from the category table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Parameter name as written in my.cnf (mandatory)
    pub cnf_param_name: String,

    /// Unit of the value, e.g. `ms` or `bytes` (optional)
    pub unit: Option<String>,

    /// Grouping category, e.g. `Network` (optional)
    pub category: Option<String>,
}

/// Category metadata for all known variables, keyed by variable name
pub type CategoryTable = HashMap<String, CategoryRecord>;
