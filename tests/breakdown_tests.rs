mod common;
use common::row;
use tkdash::core::breakdown::{compare_names, rows_from_json, sort_breakdown_rows, sum_breakdown_values};
use tkdash::models::BreakdownRow;
use tkdash::models::breakdown::parse_number_or_zero;

fn names(rows: &[BreakdownRow]) -> Vec<&str> {
    rows.iter().map(|r| r.user_name.as_str()).collect()
}

#[test]
fn test_sort_by_value_descending_then_name() {
    let rows = vec![row("Bob", 2.0), row("Alice", 5.0), row("Carl", 2.0)];
    let sorted = sort_breakdown_rows(&rows);
    assert_eq!(names(&sorted), ["Alice", "Bob", "Carl"]);
}

#[test]
fn test_sort_does_not_touch_input() {
    let rows = vec![row("Bob", 1.0), row("Alice", 3.0)];
    let before = rows.clone();
    let _ = sort_breakdown_rows(&rows);
    assert_eq!(rows, before);
}

#[test]
fn test_sort_is_a_permutation_and_idempotent() {
    let rows = vec![
        row("Mika", 0.0),
        row("anna", 4.0),
        row("Anna", 4.0),
        row("Zed", 7.5),
        row("Bea", -1.0),
    ];
    let once = sort_breakdown_rows(&rows);
    assert_eq!(once.len(), rows.len());
    for r in &rows {
        assert!(once.contains(r));
    }
    assert_eq!(sort_breakdown_rows(&once), once);
}

#[test]
fn test_sort_values_are_non_increasing() {
    let rows = vec![row("a", 1.0), row("b", 9.0), row("c", 3.0), row("d", 9.0), row("e", 0.5)];
    let sorted = sort_breakdown_rows(&rows);
    assert!(sorted.windows(2).all(|w| w[0].value >= w[1].value));
}

#[test]
fn test_sort_empty_and_single() {
    assert!(sort_breakdown_rows(&[]).is_empty());
    let one = vec![row("Solo", 3.0)];
    assert_eq!(sort_breakdown_rows(&one), one);
}

#[test]
fn test_nan_sorts_as_zero() {
    let rows = vec![row("Nan", f64::NAN), row("Neg", -2.0), row("Pos", 1.0)];
    let sorted = sort_breakdown_rows(&rows);
    assert_eq!(names(&sorted), ["Pos", "Nan", "Neg"]);
}

#[test]
fn test_case_variants_sit_together() {
    let rows = vec![row("Bea", 1.0), row("anna", 1.0), row("Carl", 1.0), row("Anna", 1.0)];
    let sorted = sort_breakdown_rows(&rows);
    assert_eq!(names(&sorted), ["anna", "Anna", "Bea", "Carl"]);
}

#[test]
fn test_compare_names_is_total() {
    use std::cmp::Ordering;
    assert_eq!(compare_names("alice", "Bob"), Ordering::Less);
    assert_eq!(compare_names("Same", "Same"), Ordering::Equal);
    assert_ne!(compare_names("anna", "Anna"), Ordering::Equal);
}

#[test]
fn test_sum_values() {
    assert_eq!(sum_breakdown_values(&[]), 0.0);
    assert_eq!(sum_breakdown_values(&[row("a", 3.0), row("b", 4.5)]), 7.5);
    assert_eq!(sum_breakdown_values(&[row("a", -3.0), row("b", 1.0)]), -2.0);
    assert_eq!(sum_breakdown_values(&[row("a", f64::NAN), row("b", 2.0)]), 2.0);
}

#[test]
fn test_sum_is_order_independent() {
    let rows = vec![row("a", 1.0), row("b", 2.0), row("c", 4.0)];
    let sorted = sort_breakdown_rows(&rows);
    assert_eq!(sum_breakdown_values(&rows), sum_breakdown_values(&sorted));
}

#[test]
fn test_parse_number_or_zero() {
    assert_eq!(parse_number_or_zero("3"), 3.0);
    assert_eq!(parse_number_or_zero(" 2.5 "), 2.5);
    assert_eq!(parse_number_or_zero(""), 0.0);
    assert_eq!(parse_number_or_zero("abc"), 0.0);
    assert_eq!(parse_number_or_zero("NaN"), 0.0);
}

#[test]
fn test_parse_number_rejects_rust_only_infinity_spellings() {
    for raw in ["inf", "-inf", "+inf", "INF", "infinity", "-INFINITY", "nan"] {
        assert_eq!(parse_number_or_zero(raw), 0.0, "{raw}");
    }
    assert_eq!(parse_number_or_zero("Infinity"), f64::INFINITY);
    assert_eq!(parse_number_or_zero("-Infinity"), f64::NEG_INFINITY);
    assert_eq!(parse_number_or_zero(" +Infinity "), f64::INFINITY);
}

#[test]
fn test_ties_rank_by_name_after_value() {
    let rows = vec![row("Mila", 1.0), row("Anna", 3.0), row("Ben", 3.0)];
    let sorted = sort_breakdown_rows(&rows);
    let ranked: Vec<(&str, f64)> = sorted.iter().map(|r| (r.user_name.as_str(), r.value)).collect();
    assert_eq!(ranked, [("Anna", 3.0), ("Ben", 3.0), ("Mila", 1.0)]);
}

#[test]
fn test_rows_from_json_coerces_values() {
    let json = r#"[
        {"userName": "Bob", "value": "3", "secondaryInfo": "text"},
        {"userName": "Alice", "value": 5},
        {"userName": "Carl", "value": null},
        {"userName": "Dana", "value": true},
        {"userName": "Eve", "value": "n/a"},
        {"userName": "Finn"},
        {"userName": "Gus", "value": "-inf"}
    ]"#;
    let rows = rows_from_json(json);
    let values: Vec<(&str, f64)> = rows.iter().map(|r| (r.user_name.as_str(), r.value)).collect();
    assert_eq!(
        values,
        [("Bob", 3.0), ("Alice", 5.0), ("Carl", 0.0), ("Dana", 1.0), ("Eve", 0.0), ("Finn", 0.0), ("Gus", 0.0)]
    );
    assert_eq!(rows[0].secondary_info, "text");
    assert_eq!(sum_breakdown_values(&rows), 9.0);
}

#[test]
fn test_rows_from_json_text_infinity_counts_as_zero() {
    let rows = rows_from_json(r#"[{"userName": "Anna", "value": 3}, {"userName": "Zed", "value": "inf"}]"#);
    let sorted = sort_breakdown_rows(&rows);
    assert_eq!(names(&sorted), ["Anna", "Zed"]);
    assert_eq!(sum_breakdown_values(&rows), 3.0);
}

#[test]
fn test_rows_from_json_non_array_is_empty() {
    assert!(rows_from_json("{}").is_empty());
    assert!(rows_from_json("not json").is_empty());
    assert!(rows_from_json("[]").is_empty());
}
