//! Overview KPIs and their per-user breakdowns.

use crate::core::breakdown::sort_breakdown_rows;
use crate::models::{BreakdownRow, LocationStatus, RecordStatus, TimekeepingRecord};
use crate::utils::date::{DateRange, format_date, short_label};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Dashboard metrics that can be broken down per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kpi {
    TimedIn,
    NotTimedIn,
    Late,
    OnTime,
    Incomplete,
    LocationViolations,
}

impl Kpi {
    pub const ALL: [Kpi; 6] = [
        Kpi::TimedIn,
        Kpi::NotTimedIn,
        Kpi::Late,
        Kpi::OnTime,
        Kpi::Incomplete,
        Kpi::LocationViolations,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "timed-in" => Some(Kpi::TimedIn),
            "not-timed-in" | "absent" => Some(Kpi::NotTimedIn),
            "late" => Some(Kpi::Late),
            "on-time" => Some(Kpi::OnTime),
            "incomplete" => Some(Kpi::Incomplete),
            "violations" | "location-violations" => Some(Kpi::LocationViolations),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kpi::TimedIn => "timed-in",
            Kpi::NotTimedIn => "not-timed-in",
            Kpi::Late => "late",
            Kpi::OnTime => "on-time",
            Kpi::Incomplete => "incomplete",
            Kpi::LocationViolations => "violations",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Kpi::TimedIn => "Users Who Timed In",
            Kpi::NotTimedIn => "Users Not Timed In",
            Kpi::Late => "Late Users",
            Kpi::OnTime => "On-Time Users",
            Kpi::Incomplete => "Incomplete Records",
            Kpi::LocationViolations => "Location Violations",
        }
    }

    /// Whether a record counts toward this KPI.
    pub fn matches(&self, record: &TimekeepingRecord) -> bool {
        match self {
            Kpi::TimedIn => record.timed_in(),
            Kpi::NotTimedIn => !record.timed_in(),
            Kpi::Late => record.status == RecordStatus::Late,
            Kpi::OnTime => record.status == RecordStatus::OnTime,
            Kpi::Incomplete => record.status == RecordStatus::Incomplete,
            Kpi::LocationViolations => record.has_location_violation(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub range: DateRange,
    pub total_records: usize,
    pub active_users: usize,
    pub timed_in_users: usize,
    pub not_timed_in_users: usize,
    pub late_users: usize,
    pub on_time_users: usize,
    pub location_violations: usize,
    /// Percent of timed-in records that were on time.
    pub on_time_rate: f64,
    /// Mean lateness over late records, in minutes.
    pub average_late_minutes: f64,
    /// Percent of records with location data that were inside the radius.
    pub location_compliance: f64,
    pub late_trend: Vec<TrendPoint>,
}

pub fn records_in_range<'a>(
    records: &'a [TimekeepingRecord],
    range: &DateRange,
) -> Vec<&'a TimekeepingRecord> {
    records.iter().filter(|r| range.contains(&r.date)).collect()
}

fn distinct_users(records: &[&TimekeepingRecord], kpi: Option<Kpi>) -> usize {
    records
        .iter()
        .filter(|r| kpi.is_none_or(|k| k.matches(r)))
        .map(|r| r.user_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

/// Compute the overview cards for the records inside `range`.
pub fn compute_overview(records: &[TimekeepingRecord], range: &DateRange) -> Overview {
    let selected = records_in_range(records, range);

    let timed_in_records = selected.iter().filter(|r| r.timed_in()).count();
    let on_time_records = selected.iter().filter(|r| Kpi::OnTime.matches(r)).count();

    let late: Vec<i64> = selected
        .iter()
        .filter(|r| Kpi::Late.matches(r))
        .map(|r| r.late_minutes)
        .collect();
    let average_late_minutes = if late.is_empty() {
        0.0
    } else {
        late.iter().sum::<i64>() as f64 / late.len() as f64
    };

    let with_location = selected
        .iter()
        .filter(|r| r.time_in_location != LocationStatus::NoData)
        .count();
    let compliant = selected
        .iter()
        .filter(|r| r.time_in_location == LocationStatus::Compliant && !r.has_location_violation())
        .count();

    Overview {
        range: range.clone(),
        total_records: selected.len(),
        active_users: distinct_users(&selected, None),
        timed_in_users: distinct_users(&selected, Some(Kpi::TimedIn)),
        not_timed_in_users: distinct_users(&selected, Some(Kpi::NotTimedIn)),
        late_users: distinct_users(&selected, Some(Kpi::Late)),
        on_time_users: distinct_users(&selected, Some(Kpi::OnTime)),
        location_violations: selected.iter().filter(|r| r.has_location_violation()).count(),
        on_time_rate: ratio(on_time_records, timed_in_records),
        average_late_minutes,
        location_compliance: ratio(compliant, with_location),
        late_trend: late_trend(&selected, range),
    }
}

/// Late records per calendar day of the range; days without records read 0.
pub fn late_trend(records: &[&TimekeepingRecord], range: &DateRange) -> Vec<TrendPoint> {
    let mut per_day: BTreeMap<&str, usize> = BTreeMap::new();
    for r in records.iter().filter(|r| Kpi::Late.matches(r)) {
        *per_day.entry(r.date.as_str()).or_default() += 1;
    }

    range
        .dates()
        .into_iter()
        .map(|d| {
            let key = format_date(d);
            TrendPoint {
                count: per_day.get(key.as_str()).copied().unwrap_or(0),
                label: short_label(d),
                date: key,
            }
        })
        .collect()
}

/// Per-user contributions to `kpi` within `range`, ranked.
///
/// Each row's value is the number of matching records for that user, so the
/// rows sum to the KPI's record count.
pub fn breakdown(kpi: Kpi, records: &[TimekeepingRecord], range: &DateRange) -> Vec<BreakdownRow> {
    struct Acc<'a> {
        count: usize,
        late_minutes: i64,
        max_distance: f64,
        latest_date: &'a str,
    }

    let mut per_user: BTreeMap<&str, Acc> = BTreeMap::new();
    for r in records_in_range(records, range) {
        if !kpi.matches(r) {
            continue;
        }
        let acc = per_user.entry(r.employee_name.as_str()).or_insert(Acc {
            count: 0,
            late_minutes: 0,
            max_distance: 0.0,
            latest_date: "",
        });
        acc.count += 1;
        acc.late_minutes += r.late_minutes;
        let distance = r
            .time_in_distance
            .unwrap_or(0.0)
            .max(r.time_out_distance.unwrap_or(0.0));
        acc.max_distance = acc.max_distance.max(distance);
        if r.date.as_str() > acc.latest_date {
            acc.latest_date = r.date.as_str();
        }
    }

    let rows: Vec<BreakdownRow> = per_user
        .into_iter()
        .map(|(name, acc)| {
            let secondary = match kpi {
                Kpi::Late => format!("{} min late in total", acc.late_minutes),
                Kpi::LocationViolations => format!("up to {}m from site", acc.max_distance.round()),
                _ => format!("latest {}", acc.latest_date),
            };
            BreakdownRow::new(name, acc.count as f64, secondary)
        })
        .collect();

    sort_breakdown_rows(&rows)
}
