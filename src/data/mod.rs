//! Synthetic dashboard dataset.
//!
//! Everything is derived from fixed formulas over the work-date index and the
//! user index, so the same `today` always yields the same data. Nothing is
//! generated until [`Dataset::generate`] is called.

mod generator;

use crate::models::{ActivityLogEntry, Breaklist, DashboardUser, TimekeepingRecord};
use chrono::{Datelike, NaiveDate, Weekday};

pub use generator::{
    BREAKLIST_COUNT, build_activity_logs, build_breaklists, build_record, build_users,
};

/// Employee roster entry the records are generated from.
#[derive(Debug, Clone, Copy)]
pub struct UserTemplate {
    pub user_id: &'static str,
    pub employee_name: &'static str,
    pub scheduled_start_hour: i64,
    pub scheduled_start_minute: i64,
}

impl UserTemplate {
    const fn new(user_id: &'static str, employee_name: &'static str, hour: i64, minute: i64) -> Self {
        Self {
            user_id,
            employee_name,
            scheduled_start_hour: hour,
            scheduled_start_minute: minute,
        }
    }

    pub fn scheduled_start_minutes(&self) -> i64 {
        self.scheduled_start_hour * 60 + self.scheduled_start_minute
    }
}

pub static USER_TEMPLATES: [UserTemplate; 24] = [
    UserTemplate::new("u1", "Sarah Johnson", 9, 0),
    UserTemplate::new("u2", "Michael Chen", 8, 0),
    UserTemplate::new("u3", "Emily Rodriguez", 10, 0),
    UserTemplate::new("u4", "David Park", 7, 0),
    UserTemplate::new("u5", "Jessica Williams", 9, 0),
    UserTemplate::new("u6", "Robert Martinez", 8, 30),
    UserTemplate::new("u7", "Amanda Thompson", 9, 0),
    UserTemplate::new("u8", "Kevin Ramos", 9, 0),
    UserTemplate::new("u9", "Christopher Lee", 10, 0),
    UserTemplate::new("u10", "Olivia Reyes", 8, 0),
    UserTemplate::new("u11", "Daniel Cruz", 9, 30),
    UserTemplate::new("u12", "Angela Lim", 7, 30),
    UserTemplate::new("u13", "Mark Santos", 8, 0),
    UserTemplate::new("u14", "Patricia Gomez", 9, 0),
    UserTemplate::new("u15", "Ryan Flores", 10, 0),
    UserTemplate::new("u16", "Nicole Tan", 8, 30),
    UserTemplate::new("u17", "Jerome Dela Cruz", 9, 0),
    UserTemplate::new("u18", "Leah Navarro", 7, 0),
    UserTemplate::new("u19", "Carlo Mendoza", 8, 0),
    UserTemplate::new("u20", "Ivy Castillo", 9, 0),
    UserTemplate::new("u21", "Paolo Reyes", 10, 0),
    UserTemplate::new("u22", "Kristine Uy", 8, 30),
    UserTemplate::new("u23", "Noel Aquino", 9, 0),
    UserTemplate::new("u24", "Mika dela Pena", 7, 30),
];

pub const STORES: [&str; 3] = ["Headquarters", "Store 1 - Downtown", "Store 2 - Uptown"];
pub const ROLES: [&str; 5] = ["Employee", "Employee", "Employee", "Team Leader", "Manager"];

#[derive(Debug, Clone)]
pub struct Dataset {
    pub today: NaiveDate,
    pub records: Vec<TimekeepingRecord>,
    pub users: Vec<DashboardUser>,
    pub activity_logs: Vec<ActivityLogEntry>,
    pub breaklists: Vec<Breaklist>,
}

impl Dataset {
    /// Build the full dataset: one record per user per work day, from the
    /// first of the month one year before `today` up to `today`.
    pub fn generate(today: NaiveDate) -> Self {
        let work_dates = work_dates(history_start(today), today);

        let records: Vec<TimekeepingRecord> = work_dates
            .iter()
            .enumerate()
            .flat_map(|(date_index, date)| {
                USER_TEMPLATES
                    .iter()
                    .enumerate()
                    .map(move |(user_index, user)| build_record(*date, date_index, user, user_index))
            })
            .collect();

        let users = build_users(&records, today);
        let activity_logs = build_activity_logs(&records);
        let breaklists = build_breaklists();

        tracing::debug!(
            records = records.len(),
            users = users.len(),
            logs = activity_logs.len(),
            %today,
            "dataset generated"
        );

        Self {
            today,
            records,
            users,
            activity_logs,
            breaklists,
        }
    }

    pub fn find_record(&self, id: &str) -> Option<&TimekeepingRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

fn history_start(today: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year() - 1, today.month(), 1).unwrap_or(today)
}

pub fn is_work_day(d: NaiveDate) -> bool {
    !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Monday to Friday dates between `start` and `end`, inclusive.
pub fn work_dates(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| is_work_day(*d))
        .collect()
}
