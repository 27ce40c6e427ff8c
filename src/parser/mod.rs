//! Input parsing and schema definitions.
//!
//! This module handles:
//! - Parsing raw settings dumps into keyed variable sets
//! - Loading the optional category side table
//! - Defining the shared data model

pub mod categories;
pub mod dump;
pub mod schema;

// Re-export main types
pub use categories::parse_categories;
pub use dump::parse_dump;
pub use schema::{CategoryRecord, CategoryTable, VariableRecord, VariableSet};
