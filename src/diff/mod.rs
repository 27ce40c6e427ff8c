//! Variable-set comparison and category annotation.
//!
//! This module compares the new and template variable sets and produces
//! the discrepancy list the reporter serializes.
//!
//! # Example
//! ```ignore
//! use mysql_settings_diff::diff::{compare_variable_sets, merge_categories};
//! use mysql_settings_diff::parser::{parse_categories, parse_dump};
//!
//! let new = parse_dump(&new_text);
//! let template = parse_dump(&template_text);
//! let categories = parse_categories(&category_text)?;
//!
//! let differences = compare_variable_sets(&new, &template);
//! let annotated = merge_categories(differences, Some(&categories));
//! ```

mod annotate;
mod engine;
mod schema;

// Public API exports
pub use annotate::merge_categories;
pub use engine::compare_variable_sets;
pub use schema::Discrepancy;
