//! Formatting utilities used for CLI and export outputs.

use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

static TWELVE_HOUR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2}):(\d{2})\s(AM|PM)$").expect("static 12-hour pattern")
});

/// Minutes after midnight → `hh:mm AM/PM`. Wraps around the day in both
/// directions.
pub fn to_12_hour(total_minutes: i64) -> String {
    let normalized = total_minutes.rem_euclid(1440);
    let hour24 = normalized / 60;
    let minute = normalized % 60;
    let period = if hour24 >= 12 { "PM" } else { "AM" };
    let hour12 = if hour24 % 12 == 0 { 12 } else { hour24 % 12 };
    format!("{:02}:{:02} {}", hour12, minute, period)
}

/// `7h 30m`; negative input is shown as `0h 00m`.
pub fn duration_label(minutes: i64) -> String {
    let safe = minutes.max(0);
    format!("{}h {:02}m", safe / 60, safe % 60)
}

/// `05:07 PM` → `17:07`. `None` for anything else, `-` included.
pub fn twelve_to_24_hour(label: &str) -> Option<String> {
    let caps = TWELVE_HOUR.captures(label)?;
    let hour12: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    let hour24 = if &caps[3] == "AM" {
        hour12 % 12
    } else {
        hour12 % 12 + 12
    };
    Some(format!("{:02}:{:02}", hour24, minute))
}

/// Activity-log timestamp for a record date and a 12-hour clock label.
/// Unreadable labels fall back to midnight.
pub fn log_timestamp(date: &str, time_label: &str) -> String {
    match twelve_to_24_hour(time_label) {
        Some(t) => format!("{date} {t}:00"),
        None => format!("{date} 00:00:00"),
    }
}

/// `2025-11-14 02:09 PM`, the format of breaklist creation and approval times.
pub fn clock_label(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%d %I:%M %p").to_string()
}

/// `86.1%`; an empty population reads as `0.0%`.
pub fn percent(part: usize, whole: usize) -> String {
    if whole == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 * 100.0 / whole as f64)
}

/// Whole numbers without decimals, everything else with up to two.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
