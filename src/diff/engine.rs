//! Core comparison engine.
//! Computes the three-way set difference between two variable sets.

use super::schema::Discrepancy;
use crate::parser::schema::VariableSet;
use crate::utils::config::MISSING_SETTING;
use log::debug;

/// Compare two variable sets and collect every discrepancy
///
/// **Public** - main entry point for diffing
///
/// Covers three disjoint key populations:
/// * changed - present in both sets with unequal values (plain string
///   inequality, whitespace and case significant)
/// * added - present only in `new`; the template value becomes the
///   `setting not provided` placeholder
/// * removed - present only in `template`; the new value becomes the
///   placeholder
///
/// Keys with equal values on both sides produce nothing. The returned
/// order is unspecified; sorting is the reporter's job.
pub fn compare_variable_sets(new: &VariableSet, template: &VariableSet) -> Vec<Discrepancy> {
    let mut differences = Vec::new();

    for (key, record) in new {
        match template.get(key) {
            Some(template_record) => {
                if template_record.value != record.value {
                    differences.push(Discrepancy::new(
                        key.clone(),
                        record.value.clone(),
                        template_record.value.clone(),
                    ));
                }
            }
            None => {
                differences.push(Discrepancy::new(
                    key.clone(),
                    record.value.clone(),
                    MISSING_SETTING,
                ));
            }
        }
    }

    for (key, record) in template {
        if !new.contains_key(key) {
            differences.push(Discrepancy::new(
                key.clone(),
                MISSING_SETTING,
                record.value.clone(),
            ));
        }
    }

    debug!(
        "Comparison found {} discrepancies ({} new-side keys, {} template-side keys)",
        differences.len(),
        new.len(),
        template.len()
    );

    differences
}
