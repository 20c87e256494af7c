use chrono::NaiveDate;
use tkdash::core::breaklist::{APPROVER, Decision, decide, decide_by_id, status_counts};
use tkdash::core::filter::BreaklistFilter;
use tkdash::data::{BREAKLIST_COUNT, build_breaklists};
use tkdash::errors::AppError;
use tkdash::models::{BreaklistStatus, StoreKey};

fn at(h: u32, m: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 2, 12).unwrap().and_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_breaklists_are_deterministic() {
    let lists = build_breaklists();
    assert_eq!(lists.len(), BREAKLIST_COUNT);
    assert_eq!(lists, build_breaklists());
    assert_eq!(lists[0].id, "gen-1");
    assert_eq!(lists[39].id, "gen-40");
}

#[test]
fn test_first_breaklist_fields() {
    let first = &build_breaklists()[0];
    assert_eq!(first.store, "Headquarters");
    assert_eq!(first.store_key, StoreKey::Hq);
    assert_eq!(first.generated_by, "Admin User");
    assert_eq!(first.status, BreaklistStatus::Rejected);
    assert_eq!(first.date_range, "Nov 1-14, 2025");
    assert_eq!(first.employee_count, 18);
    assert_eq!(first.created_at, "2025-11-14 02:00 PM");
    assert_eq!(first.approved_at, "2025-11-14 02:30 PM");
    assert_eq!(first.approved_by, "Admin User");
    assert_eq!(first.notification_recipient, "hq-team@company.com");
}

#[test]
fn test_second_half_of_month_breaklist() {
    let second = &build_breaklists()[1];
    assert_eq!(second.store, "Store 1 - Downtown");
    assert_eq!(second.generated_by, "Manager Thompson");
    assert_eq!(second.status, BreaklistStatus::Approved);
    assert_eq!(second.date_range, "Dec 16-29, 2025");
    assert_eq!(second.created_at, "2025-12-29 03:09 PM");
    assert_eq!(second.approved_at, "2025-12-29 03:40 PM");
    assert_eq!(second.approved_by, "Manager Thompson");
    assert_eq!(second.employee_count, 21);
}

#[test]
fn test_pending_breaklist_has_no_decision() {
    let fifth = &build_breaklists()[4];
    assert_eq!(fifth.id, "gen-5");
    assert_eq!(fifth.status, BreaklistStatus::Pending);
    assert_eq!(fifth.generated_by, "Manager Thompson");
    assert_eq!(fifth.created_at, "2025-11-14 06:36 PM");
    assert_eq!(fifth.approved_at, "-");
    assert_eq!(fifth.approved_by, "-");
    assert_eq!(fifth.employee_count, 30);
}

#[test]
fn test_period_crossing_month_end_keeps_end_day() {
    let fourth = &build_breaklists()[3];
    assert_eq!(fourth.store_key, StoreKey::Store3);
    assert_eq!(fourth.date_range, "Feb 16-1, 2026");
}

#[test]
fn test_status_counts() {
    let lists = build_breaklists();
    let all: Vec<_> = lists.iter().collect();
    assert_eq!(
        status_counts(&all),
        [
            (BreaklistStatus::Pending, 8),
            (BreaklistStatus::Approved, 26),
            (BreaklistStatus::Rejected, 6)
        ]
    );
}

#[test]
fn test_breaklist_filter() {
    let lists = build_breaklists();

    let westside = BreaklistFilter {
        store: Some(StoreKey::Store3),
        ..Default::default()
    };
    assert_eq!(westside.apply(&lists).len(), 10);

    let every_store = BreaklistFilter {
        store: Some(StoreKey::All),
        ..Default::default()
    };
    assert_eq!(every_store.apply(&lists).len(), BREAKLIST_COUNT);

    let pending_hq = BreaklistFilter {
        search: "HQ-TEAM".to_string(),
        status: Some(BreaklistStatus::Pending),
        ..Default::default()
    };
    let hits = pending_hq.apply(&lists);
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|l| l.store_key == StoreKey::Hq && l.status == BreaklistStatus::Pending));

    let by_generator = BreaklistFilter {
        search: "operations".to_string(),
        ..Default::default()
    };
    assert!(by_generator.apply(&lists).iter().all(|l| l.generated_by == "Operations Lead"));
}

#[test]
fn test_approve_pending_breaklist() {
    let mut lists = build_breaklists();
    let list = decide_by_id(&mut lists, "gen-5", Decision::Approve, APPROVER, at(9, 5)).unwrap();
    assert_eq!(list.status, BreaklistStatus::Approved);
    assert_eq!(list.approved_by, "Admin User");
    assert_eq!(list.approved_at, "2026-02-12 09:05 AM");
}

#[test]
fn test_reject_pending_breaklist() {
    let mut lists = build_breaklists();
    decide(&mut lists[8], Decision::Reject, APPROVER, at(13, 0)).unwrap();
    assert_eq!(lists[8].status, BreaklistStatus::Rejected);
    assert_eq!(lists[8].approved_at, "2026-02-12 01:00 PM");
}

#[test]
fn test_decided_breaklist_cannot_change() {
    let mut lists = build_breaklists();
    let before = lists[1].clone();
    let err = decide(&mut lists[1], Decision::Reject, APPROVER, at(10, 0)).unwrap_err();
    assert!(matches!(err, AppError::BreaklistDecided { .. }));
    assert_eq!(lists[1], before);
}

#[test]
fn test_unknown_breaklist_id() {
    let mut lists = build_breaklists();
    let err = decide_by_id(&mut lists, "gen-99", Decision::Approve, APPROVER, at(10, 0)).unwrap_err();
    assert!(matches!(err, AppError::UnknownBreaklist(id) if id == "gen-99"));
}
