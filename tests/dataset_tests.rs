use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;
use tkdash::data::{Dataset, USER_TEMPLATES, is_work_day, work_dates};
use tkdash::models::{ActivityCategory, LocationStatus, RecordStatus};

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 12).unwrap()
}

#[test]
fn test_dataset_is_deterministic() {
    let a = Dataset::generate(anchor());
    let b = Dataset::generate(anchor());
    assert_eq!(a.records, b.records);
    assert_eq!(a.users, b.users);
    assert_eq!(a.activity_logs, b.activity_logs);
}

#[test]
fn test_one_record_per_user_per_work_day() {
    let data = Dataset::generate(anchor());
    let start = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    let days = work_dates(start, anchor()).len();
    assert_eq!(data.records.len(), days * USER_TEMPLATES.len());

    let ids: HashSet<&str> = data.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), data.records.len());

    assert!(data.records.iter().all(|r| r.date.as_str() <= "2026-02-12"));
    assert!(data.records.iter().all(|r| r.date.as_str() >= "2025-02-01"));
}

#[test]
fn test_no_weekend_records() {
    let data = Dataset::generate(anchor());
    for r in &data.records {
        let d = NaiveDate::parse_from_str(&r.date, "%Y-%m-%d").unwrap();
        assert!(!matches!(d.weekday(), Weekday::Sat | Weekday::Sun), "{}", r.id);
    }
    assert!(!is_work_day(NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()));
    assert!(is_work_day(NaiveDate::from_ymd_opt(2026, 2, 13).unwrap()));
}

#[test]
fn test_record_status_is_consistent() {
    let data = Dataset::generate(anchor());
    for r in &data.records {
        match r.status {
            RecordStatus::Absent => {
                assert_eq!(r.actual_time_in, "-");
                assert_eq!(r.actual_time_out, "-");
                assert_eq!(r.time_in_location, LocationStatus::NoData);
                assert!(r.time_in_entries.is_empty());
            }
            RecordStatus::Incomplete => {
                assert_ne!(r.actual_time_in, "-");
                assert_eq!(r.actual_time_out, "-");
                assert!(r.time_out_entries.is_empty());
            }
            RecordStatus::Late => assert!(r.late_minutes >= 10),
            RecordStatus::OnTime => assert_eq!(r.late_minutes, 0),
        }
    }
}

#[test]
fn test_every_status_occurs() {
    let data = Dataset::generate(anchor());
    for status in [
        RecordStatus::OnTime,
        RecordStatus::Late,
        RecordStatus::Absent,
        RecordStatus::Incomplete,
    ] {
        assert!(data.records.iter().any(|r| r.status == status), "{status:?}");
    }
    assert!(data.records.iter().any(|r| r.has_location_violation()));
}

#[test]
fn test_find_record() {
    let data = Dataset::generate(anchor());
    let r = data.find_record("2026-02-12-u1").unwrap();
    assert_eq!(r.employee_name, "Sarah Johnson");
    assert!(data.find_record("2026-02-14-u1").is_none());
}

#[test]
fn test_users_cover_roster() {
    let data = Dataset::generate(anchor());
    assert_eq!(data.users.len(), USER_TEMPLATES.len());
    assert_eq!(data.users[0].email, "sarah.johnson@techcorp.com");
    assert_eq!(data.users[1].company, "RetailCo");
    assert!(data.users.iter().all(|u| u.phone.starts_with("+63 9")));
}

#[test]
fn test_activity_logs_newest_first() {
    let data = Dataset::generate(anchor());
    assert!(!data.activity_logs.is_empty());
    assert!(
        data.activity_logs
            .windows(2)
            .all(|w| w[0].timestamp >= w[1].timestamp)
    );
    assert!(
        data.activity_logs
            .iter()
            .filter(|l| l.category == ActivityCategory::System)
            .all(|l| l.user == "System")
    );
}
