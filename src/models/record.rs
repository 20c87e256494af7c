use super::location::{LocationEntry, LocationStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordStatus {
    OnTime,
    Late,
    Absent,
    Incomplete,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::OnTime => "on-time",
            RecordStatus::Late => "late",
            RecordStatus::Absent => "absent",
            RecordStatus::Incomplete => "incomplete",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "on-time" | "ontime" => Some(RecordStatus::OnTime),
            "late" => Some(RecordStatus::Late),
            "absent" => Some(RecordStatus::Absent),
            "incomplete" => Some(RecordStatus::Incomplete),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::OnTime => "On Time",
            RecordStatus::Late => "Late",
            RecordStatus::Absent => "Absent",
            RecordStatus::Incomplete => "Incomplete",
        }
    }
}

/// One employee's attendance for one work day.
///
/// Clock labels are 12-hour (`09:15 AM`); `-` marks a missing clock event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimekeepingRecord {
    pub id: String,
    pub user_id: String,
    pub employee_name: String,
    pub date: String,
    pub scheduled_start: String,
    pub scheduled_end: String,
    pub break_minutes: i64,
    pub scheduled_hours: String,
    pub actual_time_in: String,
    pub time_in_location: LocationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_distance: Option<f64>,
    #[serde(default)]
    pub time_in_entries: Vec<LocationEntry>,
    pub break_in: String,
    pub break_out: String,
    pub actual_time_out: String,
    pub time_out_location: LocationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_out_distance: Option<f64>,
    #[serde(default)]
    pub time_out_entries: Vec<LocationEntry>,
    pub worked_duration: String,
    pub late_minutes: i64,
    pub status: RecordStatus,
}

impl TimekeepingRecord {
    pub fn timed_in(&self) -> bool {
        self.actual_time_in != "-"
    }

    pub fn timed_out(&self) -> bool {
        self.actual_time_out != "-"
    }

    pub fn has_location_violation(&self) -> bool {
        self.time_in_location == LocationStatus::Outside
            || self.time_out_location == LocationStatus::Outside
    }
}
