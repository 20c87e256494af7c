// src/export/model.rs

use crate::core::location::{build_google_maps_url, get_latest_time_out_entry};
use crate::models::TimekeepingRecord;
use serde::Serialize;

/// Flat view of a time record for CSV / JSON export. Location samples are
/// reduced to a map link for the latest entry of each clock event.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    pub id: String,
    pub date: String,
    pub user_id: String,
    pub employee_name: String,
    pub scheduled_start: String,
    pub scheduled_end: String,
    pub break_minutes: i64,
    pub time_in: String,
    pub time_in_location: String,
    pub time_in_distance_m: Option<f64>,
    pub time_in_map: Option<String>,
    pub break_in: String,
    pub break_out: String,
    pub time_out: String,
    pub time_out_location: String,
    pub time_out_distance_m: Option<f64>,
    pub time_out_map: Option<String>,
    pub worked: String,
    pub late_minutes: i64,
    pub status: String,
}

impl From<&TimekeepingRecord> for RecordExport {
    fn from(r: &TimekeepingRecord) -> Self {
        Self {
            id: r.id.clone(),
            date: r.date.clone(),
            user_id: r.user_id.clone(),
            employee_name: r.employee_name.clone(),
            scheduled_start: r.scheduled_start.clone(),
            scheduled_end: r.scheduled_end.clone(),
            break_minutes: r.break_minutes,
            time_in: r.actual_time_in.clone(),
            time_in_location: r.time_in_location.as_str().to_string(),
            time_in_distance_m: r.time_in_distance,
            time_in_map: build_google_maps_url(get_latest_time_out_entry(&r.time_in_entries)),
            break_in: r.break_in.clone(),
            break_out: r.break_out.clone(),
            time_out: r.actual_time_out.clone(),
            time_out_location: r.time_out_location.as_str().to_string(),
            time_out_distance_m: r.time_out_distance,
            time_out_map: build_google_maps_url(get_latest_time_out_entry(&r.time_out_entries)),
            worked: r.worked_duration.clone(),
            late_minutes: r.late_minutes,
            status: r.status.as_str().to_string(),
        }
    }
}
