/// ANSI color helper utilities for terminal output.
use crate::models::{AccountStatus, ActivityOutcome, BreaklistStatus, LocationStatus, RecordStatus};

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Missing clock labels (`-`) and empty cells are greyed out.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        paint(GREY, value)
    } else {
        value.to_string()
    }
}

pub fn color_for_status(status: RecordStatus) -> &'static str {
    match status {
        RecordStatus::OnTime => GREEN,
        RecordStatus::Late => YELLOW,
        RecordStatus::Absent => RED,
        RecordStatus::Incomplete => BLUE,
    }
}

pub fn color_for_location(status: LocationStatus) -> &'static str {
    match status {
        LocationStatus::Compliant => GREEN,
        LocationStatus::Outside => RED,
        LocationStatus::NoData => GREY,
    }
}

pub fn color_for_account(status: AccountStatus) -> &'static str {
    match status {
        AccountStatus::Active => GREEN,
        AccountStatus::Suspended => RED,
        AccountStatus::Inactive => GREY,
    }
}

pub fn color_for_outcome(outcome: ActivityOutcome) -> &'static str {
    match outcome {
        ActivityOutcome::Success => GREEN,
        ActivityOutcome::Failed => RED,
    }
}

pub fn color_for_breaklist(status: BreaklistStatus) -> &'static str {
    match status {
        BreaklistStatus::Pending => YELLOW,
        BreaklistStatus::Approved => GREEN,
        BreaklistStatus::Rejected => RED,
    }
}
