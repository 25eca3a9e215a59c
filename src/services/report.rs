use crate::domain::models::{CheckReport, Defect};
use serde_json::Value;

/// Assembles the final check report. Defects arrive already ordered by input
/// position and rule order; assembly must not reorder them.
pub fn build_check_report(source: &str, products: &[Value], defects: Vec<Defect>) -> CheckReport {
    CheckReport {
        source: source.to_string(),
        products_tested: products.len(),
        defects_found: defects.len(),
        defects,
    }
}
