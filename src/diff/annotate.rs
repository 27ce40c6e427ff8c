//! Category annotation for comparison results.
//!
//! Joins discrepancies with the optional category table so the report can
//! group related settings and show units and my.cnf parameter names.

use super::schema::Discrepancy;
use crate::parser::schema::CategoryTable;
use log::debug;

/// Fill in category metadata on a list of discrepancies
///
/// **Public** - second pipeline stage after the comparison engine
///
/// With a table, a key that is found copies its `cnf_param_name` and takes
/// `unit`/`category` from the record where present, empty string otherwise.
/// A key absent from the table keeps all three metadata fields empty but
/// the discrepancy itself is retained.
///
/// Without a table, discrepancies pass through unannotated with empty
/// metadata. The predecessor script instead dropped the whole report in
/// that mode, which made a category-less run indistinguishable from a
/// clean comparison; passing through is the intended behavior here.
pub fn merge_categories(
    mut differences: Vec<Discrepancy>,
    categories: Option<&CategoryTable>,
) -> Vec<Discrepancy> {
    let Some(table) = categories else {
        debug!("No category table supplied, leaving metadata empty");
        return differences;
    };

    let mut annotated = 0usize;
    for item in &mut differences {
        if let Some(record) = table.get(&item.key) {
            item.cnf_param_name = record.cnf_param_name.clone();
            item.unit = record.unit.clone().unwrap_or_default();
            item.category = record.category.clone().unwrap_or_default();
            annotated += 1;
        }
    }

    debug!(
        "Annotated {}/{} discrepancies from category table",
        annotated,
        differences.len()
    );

    differences
}
