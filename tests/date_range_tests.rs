use chrono::NaiveDate;
use tkdash::utils::date::{
    DateRange, RangePreset, get_preset_range, is_date_in_range, normalize_range,
    parse_timestamp_or_none, resolve_range,
};

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 12).unwrap()
}

#[test]
fn test_presets_end_on_anchor() {
    assert_eq!(get_preset_range("today", "2026-02-12"), DateRange::new("2026-02-12", "2026-02-12"));
    assert_eq!(get_preset_range("this-week", "2026-02-12"), DateRange::new("2026-02-06", "2026-02-12"));
    assert_eq!(get_preset_range("this-2-weeks", "2026-02-12"), DateRange::new("2026-01-30", "2026-02-12"));
    assert_eq!(get_preset_range("this-month", "2026-02-12"), DateRange::new("2026-02-01", "2026-02-12"));
}

#[test]
fn test_presets_cross_month_and_year_boundaries() {
    assert_eq!(get_preset_range("this-week", "2026-03-03"), DateRange::new("2026-02-25", "2026-03-03"));
    assert_eq!(get_preset_range("this-2-weeks", "2026-01-05"), DateRange::new("2025-12-23", "2026-01-05"));
    assert_eq!(get_preset_range("this-week", "2024-03-02"), DateRange::new("2024-02-25", "2024-03-02"));
    assert_eq!(get_preset_range("this-month", "2026-01-01"), DateRange::new("2026-01-01", "2026-01-01"));
}

#[test]
fn test_preset_day_counts() {
    for (preset, days) in [("today", 1), ("this-week", 7), ("this-2-weeks", 14)] {
        let r = get_preset_range(preset, "2026-02-12");
        assert_eq!(r.dates().len(), days, "{preset}");
        assert!(r.start <= r.end);
    }
    assert_eq!(get_preset_range("this-month", "2026-02-12").dates().len(), 12);
}

#[test]
fn test_unknown_preset_and_bad_anchor_give_empty_range() {
    assert!(get_preset_range("last-year", "2026-02-12").is_empty());
    assert!(get_preset_range("", "2026-02-12").is_empty());
    assert!(get_preset_range("today", "").is_empty());
    assert!(get_preset_range("today", "not-a-date").is_empty());
    assert!(get_preset_range("this-week", "2026-02-30").is_empty());
    assert_eq!(get_preset_range("custom", "2026-02-12"), DateRange::empty());
}

#[test]
fn test_preset_names_round_trip() {
    for p in RangePreset::ALL {
        assert_eq!(RangePreset::from_name(p.as_str()), Some(p));
    }
    assert_eq!(RangePreset::ThisTwoWeeks.label(), "Last 14 Days");
}

#[test]
fn test_normalize_range_orders_bounds() {
    assert_eq!(normalize_range("2026-02-10", "2026-02-01"), DateRange::new("2026-02-01", "2026-02-10"));
    assert_eq!(normalize_range("2026-02-01", "2026-02-10"), DateRange::new("2026-02-01", "2026-02-10"));
    assert_eq!(normalize_range("2026-02-05", "2026-02-05"), DateRange::new("2026-02-05", "2026-02-05"));
}

#[test]
fn test_normalize_range_is_idempotent() {
    let once = normalize_range("2026-03-01", "2025-12-31");
    assert_eq!(normalize_range(&once.start, &once.end), once);
}

#[test]
fn test_normalize_range_with_missing_bound_is_empty() {
    assert!(normalize_range("", "2026-02-10").is_empty());
    assert!(normalize_range("2026-02-10", "").is_empty());
    assert!(normalize_range("", "").is_empty());
}

#[test]
fn test_is_date_in_range_is_inclusive() {
    assert!(is_date_in_range("2026-02-01", "2026-02-01", "2026-02-12"));
    assert!(is_date_in_range("2026-02-12", "2026-02-01", "2026-02-12"));
    assert!(is_date_in_range("2026-02-07", "2026-02-01", "2026-02-12"));
    assert!(!is_date_in_range("2026-01-31", "2026-02-01", "2026-02-12"));
    assert!(!is_date_in_range("2026-02-13", "2026-02-01", "2026-02-12"));
}

#[test]
fn test_is_date_in_range_rejects_empty_inputs_and_inverted_range() {
    assert!(!is_date_in_range("", "2026-02-01", "2026-02-12"));
    assert!(!is_date_in_range("2026-02-05", "", "2026-02-12"));
    assert!(!is_date_in_range("2026-02-05", "2026-02-01", ""));
    assert!(!is_date_in_range("2026-02-05", "2026-02-12", "2026-02-01"));
}

#[test]
fn test_range_display() {
    assert_eq!(DateRange::empty().to_string(), "(no range)");
    assert_eq!(DateRange::new("2026-02-12", "2026-02-12").to_string(), "2026-02-12");
    assert_eq!(DateRange::new("2026-02-01", "2026-02-12").to_string(), "2026-02-01 → 2026-02-12");
}

#[test]
fn test_resolve_range_prefers_custom_pair() {
    let r = resolve_range(None, Some("2026-02-10"), Some("2026-02-03"), anchor(), "today").unwrap();
    assert_eq!(r, DateRange::new("2026-02-03", "2026-02-10"));
}

#[test]
fn test_resolve_range_single_bound_is_one_day() {
    let r = resolve_range(None, None, Some("2026-01-20"), anchor(), "today").unwrap();
    assert_eq!(r, DateRange::new("2026-01-20", "2026-01-20"));
}

#[test]
fn test_resolve_range_falls_back_to_default_preset() {
    let r = resolve_range(None, None, None, anchor(), "this-week").unwrap();
    assert_eq!(r, DateRange::new("2026-02-06", "2026-02-12"));
}

#[test]
fn test_resolve_range_errors() {
    assert!(resolve_range(Some("yesterday"), None, None, anchor(), "today").is_err());
    assert!(resolve_range(None, Some("2026-13-01"), Some("2026-02-01"), anchor(), "today").is_err());
    assert!(
        resolve_range(Some("today"), Some("2026-02-01"), Some("2026-02-03"), anchor(), "today").is_err()
    );
}

#[test]
fn test_parse_timestamp_variants() {
    let plain = parse_timestamp_or_none("2026-02-12T17:05:00").unwrap();
    assert_eq!(parse_timestamp_or_none("2026-02-12 17:05:00"), Some(plain));
    assert_eq!(parse_timestamp_or_none("2026-02-12T17:05:00Z"), Some(plain));
    assert_eq!(parse_timestamp_or_none("2026-02-13T01:05:00+08:00"), Some(plain));
    assert!(parse_timestamp_or_none("2026-02-12").is_some());
    assert!(parse_timestamp_or_none("garbage").is_none());
    assert!(parse_timestamp_or_none("").is_none());
}
