use super::{ROLES, STORES, USER_TEMPLATES, UserTemplate};
use crate::models::{
    AccountStatus, ActivityCategory, ActivityLogEntry, ActivityOutcome, ActivityStatus,
    Breaklist, BreaklistStatus, DashboardUser, GeoPoint, LocationEntry, LocationStatus, RecordStatus, StoreKey,
    TimekeepingRecord, VerificationStatus,
};
use crate::utils::date::format_date;
use crate::utils::formatting::{clock_label, duration_label, log_timestamp, to_12_hour};
use chrono::{Datelike, Days, Months, NaiveDate, TimeDelta};
use std::collections::HashMap;

const SHIFT_MINUTES: i64 = 8 * 60;

fn clock_timestamp(date_key: &str, minutes: i64) -> String {
    format!("{date_key}T{:02}:{:02}:00", minutes / 60, minutes % 60)
}

/// Attendance record for `user` on the `date_index`-th work day.
pub fn build_record(
    date: NaiveDate,
    date_index: usize,
    user: &UserTemplate,
    user_index: usize,
) -> TimekeepingRecord {
    let d = date_index as i64;
    let u = user_index as i64;
    let date_key = format_date(date);

    let scheduled_start = user.scheduled_start_minutes();
    let scheduled_end = scheduled_start + SHIFT_MINUTES;
    let break_minutes = if u % 2 == 0 { 60 } else { 30 };

    let absent = u == 5 && d % 6 == 0;
    let incomplete = !absent && u == 3 && d % 11 == 0;
    let late_minutes = if !absent && (d + u * 3) % 5 == 0 {
        10 + (d + u) % 16
    } else {
        0
    };
    let timed_in = scheduled_start + late_minutes;
    let timed_out = scheduled_end + ((d + u) % 8 - 3);

    let break_in = scheduled_start + 3 * 60 + (u % 3) * 5;
    let break_out = break_in + break_minutes;

    let worked = if absent || incomplete {
        0
    } else {
        (timed_out - timed_in - break_minutes).max(0)
    };

    let location_pattern = (d + u) % 10;
    let has_location = location_pattern != 2 && location_pattern != 7;
    let outside = location_pattern == 4 || location_pattern == 8;
    let sample_point = if outside {
        GeoPoint::rizal_park()
    } else {
        GeoPoint::office()
    };
    let sampled_status = match (has_location, outside) {
        (false, _) => LocationStatus::NoData,
        (true, true) => LocationStatus::Outside,
        (true, false) => LocationStatus::Compliant,
    };

    let time_in_entries = if !absent && has_location {
        vec![LocationEntry::at(clock_timestamp(&date_key, timed_in), &sample_point)]
    } else {
        Vec::new()
    };
    let time_out_entries = if !absent && !incomplete && has_location {
        vec![LocationEntry::at(clock_timestamp(&date_key, timed_out), &sample_point)]
    } else {
        Vec::new()
    };

    let status = if absent {
        RecordStatus::Absent
    } else if incomplete {
        RecordStatus::Incomplete
    } else if late_minutes > 0 {
        RecordStatus::Late
    } else {
        RecordStatus::OnTime
    };

    let missing = || "-".to_string();

    TimekeepingRecord {
        id: format!("{date_key}-{}", user.user_id),
        user_id: user.user_id.to_string(),
        employee_name: user.employee_name.to_string(),
        scheduled_start: to_12_hour(scheduled_start),
        scheduled_end: to_12_hour(scheduled_end),
        break_minutes,
        scheduled_hours: duration_label(SHIFT_MINUTES - break_minutes),
        actual_time_in: if absent { missing() } else { to_12_hour(timed_in) },
        time_in_location: if absent { LocationStatus::NoData } else { sampled_status },
        time_in_distance: has_location.then(|| if outside { 1250.0 } else { (32 + (d + u) % 40) as f64 }),
        time_in_entries,
        break_in: if absent || incomplete { missing() } else { to_12_hour(break_in) },
        break_out: if absent || incomplete { missing() } else { to_12_hour(break_out) },
        actual_time_out: if absent || incomplete { missing() } else { to_12_hour(timed_out) },
        time_out_location: if absent || incomplete { LocationStatus::NoData } else { sampled_status },
        time_out_distance: (has_location && !incomplete)
            .then(|| if outside { 1330.0 } else { (40 + (d + u) % 45) as f64 }),
        time_out_entries,
        worked_duration: if absent || incomplete { missing() } else { duration_label(worked) },
        late_minutes,
        status,
        date: date_key,
    }
}

/// User directory, enriched with each user's most recent record.
pub fn build_users(records: &[TimekeepingRecord], today: NaiveDate) -> Vec<DashboardUser> {
    let mut latest: HashMap<&str, &TimekeepingRecord> = HashMap::new();
    for record in records {
        let newer = latest
            .get(record.user_id.as_str())
            .is_none_or(|current| record.date > current.date);
        if newer {
            latest.insert(record.user_id.as_str(), record);
        }
    }

    USER_TEMPLATES
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let latest_record = latest.get(user.user_id).copied();
            let company = if i % 2 == 0 { "TechCorp" } else { "RetailCo" };

            let verification_status = if i % 7 == 0 {
                VerificationStatus::Pending
            } else if i % 11 == 0 {
                VerificationStatus::Unverified
            } else {
                VerificationStatus::Verified
            };
            let account_status = if i % 10 == 0 {
                AccountStatus::Suspended
            } else if i % 13 == 0 {
                AccountStatus::Inactive
            } else {
                AccountStatus::Active
            };
            let missing_documents = if i % 5 == 0 {
                2
            } else if i % 3 == 0 {
                1
            } else {
                0
            };

            let recent = latest_record.filter(|r| r.timed_in());
            let phone_digits: String = (111_111_111 + i as u64 * 13_457)
                .to_string()
                .chars()
                .take(9)
                .collect();
            let email_local = user
                .employee_name
                .to_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(".");

            DashboardUser {
                id: user.user_id.to_string(),
                name: user.employee_name.to_string(),
                email: format!("{email_local}@{}.com", company.to_lowercase()),
                company: company.to_string(),
                phone: format!("+63 9{phone_digits}"),
                role: ROLES[i % ROLES.len()].to_string(),
                verification_status,
                account_status,
                missing_documents,
                last_time_in: match recent {
                    Some(r) => format!("{} {}", r.date, r.actual_time_in),
                    None => format!("{} -", format_date(today)),
                },
                activity_status: if recent.is_some() {
                    ActivityStatus::Active
                } else {
                    ActivityStatus::NoRecentActivity
                },
                assigned_schedule: format!(
                    "{} - {}",
                    latest_record.map_or("09:00 AM", |r| r.scheduled_start.as_str()),
                    latest_record.map_or("05:00 PM", |r| r.scheduled_end.as_str()),
                ),
                assigned_store: STORES[i % STORES.len()].to_string(),
            }
        })
        .collect()
}

/// Audit trail derived from the records, newest first.
pub fn build_activity_logs(records: &[TimekeepingRecord]) -> Vec<ActivityLogEntry> {
    let mut logs = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let store_key = match index % 3 {
            0 => StoreKey::Hq,
            1 => StoreKey::Store1,
            _ => StoreKey::Store2,
        };
        let role = ROLES[index % ROLES.len()];

        let entry = |suffix: &str,
                     timestamp: String,
                     activity: &str,
                     category: ActivityCategory,
                     status: ActivityOutcome,
                     details: String| ActivityLogEntry {
            id: format!("{}-{suffix}", record.id),
            timestamp,
            user: record.employee_name.clone(),
            role: role.to_string(),
            affected_employee: record.employee_name.clone(),
            activity: activity.to_string(),
            category,
            status,
            details,
            store_key,
        };

        if !record.timed_in() {
            logs.push(entry(
                "absent",
                format!("{} 09:00:00", record.date),
                "Missed clock-in",
                ActivityCategory::TimeRecord,
                ActivityOutcome::Failed,
                format!(
                    "No time-in recorded. Scheduled shift {}-{}",
                    record.scheduled_start, record.scheduled_end
                ),
            ));
            continue;
        }

        let time_in_ts = log_timestamp(&record.date, &record.actual_time_in);
        let late = record.late_minutes > 0;
        logs.push(entry(
            "time-in",
            time_in_ts.clone(),
            if late { "Late clock-in" } else { "Clocked in" },
            ActivityCategory::TimeRecord,
            ActivityOutcome::Success,
            if late {
                format!("Clocked in {} minutes late", record.late_minutes)
            } else {
                "Clocked in on time".to_string()
            },
        ));

        if record.time_in_location == LocationStatus::Outside {
            logs.push(entry(
                "in-location",
                time_in_ts,
                "Location violation",
                ActivityCategory::TimeRecord,
                ActivityOutcome::Success,
                format!(
                    "Time-in location outside allowed radius ({}m)",
                    record.time_in_distance.unwrap_or(0.0).round()
                ),
            ));
        }

        if record.timed_out() {
            logs.push(entry(
                "time-out",
                log_timestamp(&record.date, &record.actual_time_out),
                "Clocked out",
                ActivityCategory::TimeRecord,
                ActivityOutcome::Success,
                format!("Total worked {}", record.worked_duration),
            ));
        }

        if record.status == RecordStatus::Incomplete {
            let mut notice = entry(
                "incomplete",
                format!("{} 18:00:00", record.date),
                "Incomplete record",
                ActivityCategory::System,
                ActivityOutcome::Failed,
                "Missing time-out entry for scheduled shift".to_string(),
            );
            notice.user = "System".to_string();
            notice.role = "System".to_string();
            logs.push(notice);
        }

        if index % 17 == 0 {
            let mut adjustment = entry(
                "adjustment",
                format!("{} 12:15:00", record.date),
                "Time adjustment",
                ActivityCategory::Adjustment,
                ActivityOutcome::Success,
                "Adjusted record to align with approved schedule change".to_string(),
            );
            adjustment.user = "Admin User".to_string();
            adjustment.role = "Administrator".to_string();
            logs.push(adjustment);
        }
    }

    logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    logs
}

const BREAKLIST_STORES: [(&str, StoreKey, &str); 4] = [
    ("Headquarters", StoreKey::Hq, "hq-team@company.com"),
    ("Store 1 - Downtown", StoreKey::Store1, "store1-team@company.com"),
    ("Store 2 - Uptown", StoreKey::Store2, "store2-team@company.com"),
    ("Store 3 - Westside", StoreKey::Store3, "store3-team@company.com"),
];
const BREAKLIST_GENERATORS: [&str; 3] = ["Admin User", "Manager Thompson", "Operations Lead"];

/// Number of generated breaklists in the dataset.
pub const BREAKLIST_COUNT: usize = 40;

/// Generated breaklists for two-week periods from November 2025 on.
/// They do not depend on the anchor date.
pub fn build_breaklists() -> Vec<Breaklist> {
    (0..BREAKLIST_COUNT).filter_map(build_breaklist).collect()
}

fn build_breaklist(index: usize) -> Option<Breaklist> {
    let (store, store_key, recipient) = BREAKLIST_STORES[index % BREAKLIST_STORES.len()];

    let status = if index % 7 == 0 {
        BreaklistStatus::Rejected
    } else if index % 4 == 0 {
        BreaklistStatus::Pending
    } else {
        BreaklistStatus::Approved
    };

    let period_start = NaiveDate::from_ymd_opt(2025, 11, 1)?
        .checked_add_months(Months::new((index % 4) as u32))?
        .checked_add_days(Days::new(((index % 2) * 15) as u64))?;
    let period_end = period_start.checked_add_days(Days::new(13))?;
    let created_at = period_end.and_hms_opt(14 + (index % 5) as u32, ((index * 9) % 60) as u32, 0)?;
    let decided_at = created_at + TimeDelta::minutes(30 + (index % 20) as i64);

    let decided = status != BreaklistStatus::Pending;
    Some(Breaklist {
        id: format!("gen-{}", index + 1),
        generated_by: BREAKLIST_GENERATORS[index % BREAKLIST_GENERATORS.len()].to_string(),
        store: store.to_string(),
        store_key,
        date_range: format!(
            "{} {}-{}, {}",
            period_start.format("%b"),
            period_start.day(),
            period_end.day(),
            period_end.year()
        ),
        employee_count: 18 + ((index * 3) % 42) as u32,
        created_at: clock_label(created_at),
        status,
        approved_at: if decided { clock_label(decided_at) } else { "-".to_string() },
        approved_by: match (decided, index % 2) {
            (false, _) => "-".to_string(),
            (true, 0) => "Admin User".to_string(),
            (true, _) => "Manager Thompson".to_string(),
        },
        notification_recipient: recipient.to_string(),
    })
}
