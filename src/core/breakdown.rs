//! Ranking and totals for KPI breakdown views.

use crate::models::BreakdownRow;
use std::cmp::Ordering;

/// Rank rows by value (highest first), then by user name.
///
/// Returns a new vector; the input is left as is. The sort is stable and
/// the comparator is a total order, so re-sorting the output is a no-op.
pub fn sort_breakdown_rows(rows: &[BreakdownRow]) -> Vec<BreakdownRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        b.numeric_value()
            .total_cmp(&a.numeric_value())
            .then_with(|| compare_names(&a.user_name, &b.user_name))
    });
    sorted
}

/// Aggregate KPI total. NaN values count as zero.
pub fn sum_breakdown_values(rows: &[BreakdownRow]) -> f64 {
    rows.iter().map(BreakdownRow::numeric_value).sum()
}

/// Case-folded order first so `anna` and `Anna` sit together, then the raw
/// ordinal order to keep it total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Decode rows from a JSON document. Anything other than an array of objects
/// yields no rows.
pub fn rows_from_json(content: &str) -> Vec<BreakdownRow> {
    let value: serde_json::Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(error = %e, "breakdown input is not JSON");
            return Vec::new();
        }
    };

    let serde_json::Value::Array(items) = value else {
        tracing::debug!("breakdown input is not an array");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<BreakdownRow>(item) {
            Ok(row) => Some(row),
            Err(e) => {
                tracing::debug!(error = %e, "skipping malformed breakdown row");
                None
            }
        })
        .collect()
}
