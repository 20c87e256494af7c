use chrono::NaiveDate;
use tkdash::core::filter::{LogFilter, RecordFilter, UserFilter};
use tkdash::core::pagination::{DEFAULT_PAGE_SIZE, Pagination};
use tkdash::data::Dataset;
use tkdash::models::{AccountStatus, ActivityCategory, LocationStatus, RecordStatus, StoreKey};
use tkdash::utils::date::DateRange;

fn dataset() -> Dataset {
    Dataset::generate(NaiveDate::from_ymd_opt(2026, 2, 12).unwrap())
}

#[test]
fn test_pagination_basics() {
    let p = Pagination::new(57, 10, 1);
    assert_eq!(p.total_pages, 6);
    assert_eq!(p.offset(), 0);
    assert_eq!(p.summary(), "Showing 1-10 of 57 (page 1/6)");

    let last = p.go_to(6);
    assert_eq!(last.offset(), 50);
    assert_eq!(last.summary(), "Showing 51-57 of 57 (page 6/6)");
}

#[test]
fn test_pagination_clamps_pages() {
    let p = Pagination::new(25, 10, 99);
    assert_eq!(p.current_page, 3);
    assert_eq!(p.next().current_page, 3);
    assert_eq!(Pagination::new(25, 10, 0).current_page, 1);
    assert_eq!(Pagination::new(25, 10, 1).previous().current_page, 1);
}

#[test]
fn test_pagination_empty_and_zero_size() {
    let p = Pagination::new(0, 10, 3);
    assert_eq!(p.total_pages, 1);
    assert_eq!(p.current_page, 1);
    assert_eq!(p.summary(), "Showing 0 of 0");
    assert_eq!(Pagination::new(5, 0, 1).page_size, DEFAULT_PAGE_SIZE);
}

#[test]
fn test_pagination_slice_and_page_size_change() {
    let items: Vec<u32> = (1..=23).collect();
    let p = Pagination::new(items.len(), 5, 5);
    assert_eq!(p.slice(&items), &[21, 22, 23]);

    let resized = p.with_page_size(10);
    assert_eq!(resized.current_page, 1);
    assert_eq!(resized.total_pages, 3);
    assert_eq!(resized.slice(&items).len(), 10);
}

#[test]
fn test_record_filter() {
    let data = dataset();
    let filter = RecordFilter {
        range: Some(DateRange::new("2026-02-09", "2026-02-12")),
        search: "sarah".to_string(),
        ..Default::default()
    };
    let hits = filter.apply(&data.records);
    assert_eq!(hits.len(), 4);
    assert!(hits.iter().all(|r| r.employee_name == "Sarah Johnson"));

    let late = RecordFilter {
        status: Some(RecordStatus::Late),
        location: Some(LocationStatus::Outside),
        ..Default::default()
    };
    assert!(
        late.apply(&data.records)
            .iter()
            .all(|r| r.status == RecordStatus::Late && r.time_in_location == LocationStatus::Outside)
    );
}

#[test]
fn test_user_filter() {
    let data = dataset();
    let suspended = UserFilter {
        status: Some(AccountStatus::Suspended),
        ..Default::default()
    };
    let hits = suspended.apply(&data.users);
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|u| u.account_status == AccountStatus::Suspended));

    let by_company = UserFilter {
        company: Some("techcorp".to_string()),
        ..Default::default()
    };
    assert_eq!(by_company.apply(&data.users).len(), 12);

    let by_email = UserFilter {
        search: "@retailco".to_string(),
        ..Default::default()
    };
    assert_eq!(by_email.apply(&data.users).len(), 12);
}

#[test]
fn test_log_filter() {
    let data = dataset();
    let filter = LogFilter {
        range: Some(DateRange::new("2026-02-12", "2026-02-12")),
        category: Some(ActivityCategory::TimeRecord),
        store: Some(StoreKey::Hq),
        ..Default::default()
    };
    let hits = filter.apply(&data.activity_logs);
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|l| l.date() == "2026-02-12"
        && l.category == ActivityCategory::TimeRecord
        && l.store_key == StoreKey::Hq));

    let all_stores = LogFilter {
        store: Some(StoreKey::All),
        ..Default::default()
    };
    assert_eq!(all_stores.apply(&data.activity_logs).len(), data.activity_logs.len());
}

#[test]
fn test_pagination_nav_hint() {
    assert_eq!(Pagination::new(5, 10, 1).nav_hint(), None);
    assert_eq!(Pagination::new(25, 10, 1).nav_hint().as_deref(), Some("next: --page 2"));
    assert_eq!(
        Pagination::new(25, 10, 2).nav_hint().as_deref(),
        Some("previous: --page 1, next: --page 3")
    );
    assert_eq!(Pagination::new(25, 10, 3).nav_hint().as_deref(), Some("previous: --page 2"));
}
