//! Table filters for records, users, activity logs and breaklists.
//!
//! Text search is a case-insensitive substring match on the trimmed query;
//! an empty query matches everything.

use crate::models::{
    AccountStatus, ActivityCategory, ActivityLogEntry, Breaklist, BreaklistStatus, DashboardUser,
    LocationStatus, RecordStatus, StoreKey, TimekeepingRecord,
};
use crate::utils::date::DateRange;

fn matches_search(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub range: Option<DateRange>,
    pub search: String,
    pub status: Option<RecordStatus>,
    pub location: Option<LocationStatus>,
}

impl RecordFilter {
    pub fn matches(&self, r: &TimekeepingRecord) -> bool {
        self.range.as_ref().is_none_or(|range| range.contains(&r.date))
            && matches_search(&self.search, &[r.employee_name.as_str()])
            && self.status.is_none_or(|s| r.status == s)
            && self.location.is_none_or(|l| r.time_in_location == l)
    }

    pub fn apply<'a>(&self, records: &'a [TimekeepingRecord]) -> Vec<&'a TimekeepingRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub search: String,
    pub company: Option<String>,
    pub role: Option<String>,
    pub status: Option<AccountStatus>,
}

impl UserFilter {
    pub fn matches(&self, u: &DashboardUser) -> bool {
        matches_search(&self.search, &[u.name.as_str(), u.email.as_str()])
            && self
                .company
                .as_deref()
                .is_none_or(|c| u.company.eq_ignore_ascii_case(c))
            && self
                .role
                .as_deref()
                .is_none_or(|r| u.role.eq_ignore_ascii_case(r))
            && self.status.is_none_or(|s| u.account_status == s)
    }

    pub fn apply<'a>(&self, users: &'a [DashboardUser]) -> Vec<&'a DashboardUser> {
        users.iter().filter(|u| self.matches(u)).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    pub range: Option<DateRange>,
    pub search: String,
    pub category: Option<ActivityCategory>,
    pub store: Option<StoreKey>,
}

impl LogFilter {
    pub fn matches(&self, log: &ActivityLogEntry) -> bool {
        self.range.as_ref().is_none_or(|range| range.contains(log.date()))
            && matches_search(
                &self.search,
                &[
                    log.user.as_str(),
                    log.affected_employee.as_str(),
                    log.activity.as_str(),
                    log.details.as_str(),
                ],
            )
            && self.category.is_none_or(|c| log.category == c)
            && self
                .store
                .is_none_or(|s| s == StoreKey::All || log.store_key == s || log.store_key == StoreKey::All)
    }

    pub fn apply<'a>(&self, logs: &'a [ActivityLogEntry]) -> Vec<&'a ActivityLogEntry> {
        logs.iter().filter(|l| self.matches(l)).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BreaklistFilter {
    pub search: String,
    pub store: Option<StoreKey>,
    pub status: Option<BreaklistStatus>,
}

impl BreaklistFilter {
    pub fn matches(&self, list: &Breaklist) -> bool {
        matches_search(
            &self.search,
            &[
                list.store.as_str(),
                list.generated_by.as_str(),
                list.notification_recipient.as_str(),
            ],
        ) && self
            .store
            .is_none_or(|s| s == StoreKey::All || list.store_key == s)
            && self.status.is_none_or(|s| list.status == s)
    }

    pub fn apply<'a>(&self, lists: &'a [Breaklist]) -> Vec<&'a Breaklist> {
        lists.iter().filter(|l| self.matches(l)).collect()
    }
}
