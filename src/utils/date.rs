//! Date range resolution.
//!
//! Dates travel as fixed-width `YYYY-MM-DD` strings so that range checks are
//! plain string comparisons. A `NaiveDate` is only built when an offset has
//! to be computed, and it is formatted straight back.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const TIMESTAMP_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Inclusive `{start, end}` pair. Both empty means "no valid range".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_empty() || self.end.is_empty()
    }

    pub fn contains(&self, date: &str) -> bool {
        is_date_in_range(date, &self.start, &self.end)
    }

    /// Every calendar day of the range, in order. Empty for the sentinel range.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let (Some(start), Some(end)) = (
            parse_date_or_none(&self.start),
            parse_date_or_none(&self.end),
        ) else {
            return Vec::new();
        };

        start.iter_days().take_while(|d| *d <= end).collect()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "(no range)")
        } else if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{} → {}", self.start, self.end)
        }
    }
}

/// Named, anchor-relative windows. The anchor is always the inclusive end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePreset {
    Today,
    ThisWeek,
    ThisTwoWeeks,
    ThisMonth,
}

impl RangePreset {
    pub const ALL: [RangePreset; 4] = [
        RangePreset::Today,
        RangePreset::ThisWeek,
        RangePreset::ThisTwoWeeks,
        RangePreset::ThisMonth,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "today" => Some(RangePreset::Today),
            "this-week" => Some(RangePreset::ThisWeek),
            "this-2-weeks" => Some(RangePreset::ThisTwoWeeks),
            "this-month" => Some(RangePreset::ThisMonth),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RangePreset::Today => "today",
            RangePreset::ThisWeek => "this-week",
            RangePreset::ThisTwoWeeks => "this-2-weeks",
            RangePreset::ThisMonth => "this-month",
        }
    }

    /// Caption used by the trend charts.
    pub fn label(&self) -> &'static str {
        match self {
            RangePreset::Today => "Today",
            RangePreset::ThisWeek => "Last 7 Days",
            RangePreset::ThisTwoWeeks => "Last 14 Days",
            RangePreset::ThisMonth => "This Month",
        }
    }

    pub fn resolve(&self, anchor: NaiveDate) -> DateRange {
        let start = match self {
            RangePreset::Today => Some(anchor),
            RangePreset::ThisWeek => anchor.checked_sub_days(Days::new(6)),
            RangePreset::ThisTwoWeeks => anchor.checked_sub_days(Days::new(13)),
            RangePreset::ThisMonth => anchor.with_day(1),
        };

        match start {
            Some(s) => DateRange::new(format_date(s), format_date(anchor)),
            None => DateRange::empty(),
        }
    }
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// `Feb 5` style label for chart axes.
pub fn short_label(d: NaiveDate) -> String {
    d.format("%b %-d").to_string()
}

pub fn parse_date_or_none(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Parse an ISO-like timestamp. Offsets are folded into UTC; a bare date is
/// read as midnight.
pub fn parse_timestamp_or_none(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    for fmt in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    parse_date_or_none(s).map(|d| d.and_time(NaiveTime::MIN))
}

/// Resolve a preset name against a `YYYY-MM-DD` anchor.
///
/// Unknown presets and anchors that are not real calendar dates give the
/// empty range.
pub fn get_preset_range(preset: &str, anchor_date: &str) -> DateRange {
    let Some(anchor) = parse_date_or_none(anchor_date) else {
        tracing::debug!(anchor_date, "anchor is not a calendar date, empty range");
        return DateRange::empty();
    };

    match RangePreset::from_name(preset) {
        Some(p) => p.resolve(anchor),
        None => {
            tracing::debug!(preset, "unknown range preset, empty range");
            DateRange::empty()
        }
    }
}

/// Order a custom pair so the earlier date comes first.
pub fn normalize_range(start: &str, end: &str) -> DateRange {
    if start.is_empty() || end.is_empty() {
        return DateRange::empty();
    }

    if start <= end {
        DateRange::new(start, end)
    } else {
        DateRange::new(end, start)
    }
}

/// Inclusive, purely lexicographic membership test.
pub fn is_date_in_range(date: &str, start: &str, end: &str) -> bool {
    if date.is_empty() || start.is_empty() || end.is_empty() {
        return false;
    }
    start <= date && date <= end
}

/// Range selection used by every command that accepts
/// `--range <preset>` / `--from <date>` / `--to <date>`.
///
/// An explicit `--from/--to` pair wins over the preset; a lone bound selects
/// that single day. Unlike the soft helpers above, bad input is reported.
pub fn resolve_range(
    preset: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
    anchor: NaiveDate,
    default_preset: &str,
) -> AppResult<DateRange> {
    let canonical = |raw: &str| -> AppResult<String> {
        parse_date_or_none(raw)
            .map(format_date)
            .ok_or_else(|| AppError::InvalidDate(raw.to_string()))
    };

    match (from, to) {
        (Some(f), Some(t)) => {
            if preset.is_some() {
                return Err(AppError::InvalidRange(
                    "--range cannot be combined with --from/--to".into(),
                ));
            }
            Ok(normalize_range(&canonical(f)?, &canonical(t)?))
        }
        (Some(single), None) | (None, Some(single)) => {
            let d = canonical(single)?;
            Ok(DateRange::new(d.clone(), d))
        }
        (None, None) => {
            let name = preset.unwrap_or(default_preset);
            if RangePreset::from_name(name).is_none() {
                return Err(AppError::InvalidPreset(name.to_string()));
            }
            let range = get_preset_range(name, &format_date(anchor));
            if range.is_empty() {
                return Err(AppError::InvalidRange(format!(
                    "{name} cannot be resolved from {anchor}"
                )));
            }
            Ok(range)
        }
    }
}
