//! Schema definitions for comparison results.
//!
//! Defines the structure that represents one difference between the new
//! and template variable sets.

use serde::{Deserialize, Serialize};

/// One reported difference between the two variable sets
///
/// When a key exists on only one side, the missing side's value field
/// carries the literal `setting not provided` placeholder; at most one of
/// the two value fields is ever that placeholder. The metadata fields stay
/// empty until annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrepancy {
    /// Variable name
    pub key: String,

    /// Value in the new settings dump
    pub value_new: String,

    /// Value in the template settings dump
    pub value_template: String,

    /// Parameter name as written in my.cnf
    pub cnf_param_name: String,

    /// Unit of the value
    pub unit: String,

    /// Grouping category
    pub category: String,
}

impl Discrepancy {
    /// Build an unannotated discrepancy with empty metadata fields
    pub fn new(
        key: impl Into<String>,
        value_new: impl Into<String>,
        value_template: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value_new: value_new.into(),
            value_template: value_template.into(),
            cnf_param_name: String::new(),
            unit: String::new(),
            category: String::new(),
        }
    }
}
