pub mod breakdown;
pub mod breaklists;
pub mod config;
pub mod export;
pub mod location;
pub mod logs;
pub mod maps_url;
pub mod overview;
pub mod range;
pub mod records;
pub mod users;

use crate::cli::parser::{PageArgs, RangeArgs};
use crate::config::Config;
use crate::core::pagination::Pagination;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, OutputFormat, write_csv, write_json};
use crate::ui::messages::info;
use crate::utils::date::{DateRange, resolve_range};
use serde::Serialize;
use std::io;

impl RangeArgs {
    pub fn is_set(&self) -> bool {
        self.preset.is_some() || self.from.is_some() || self.to.is_some()
    }

    /// Resolve against the configured anchor and default preset.
    pub fn resolve(&self, cfg: &Config) -> AppResult<DateRange> {
        resolve_range(
            self.preset.as_deref(),
            self.from.as_deref(),
            self.to.as_deref(),
            cfg.anchor(),
            &cfg.default_range,
        )
    }
}

impl PageArgs {
    pub fn pagination(&self, total: usize, cfg: &Config) -> Pagination {
        if self.all {
            return Pagination::new(total, total.max(1), 1);
        }
        let base = Pagination::new(total, cfg.page_size, 1);
        let sized = match self.page_size {
            Some(size) => base.with_page_size(size),
            None => base,
        };
        sized.go_to(self.page)
    }
}

/// Page summary under a table, plus where to go next when there is more.
pub(crate) fn print_page_footer(pagination: &Pagination) {
    println!("{}", pagination.summary());
    if let Some(hint) = pagination.nav_hint() {
        info(hint);
    }
}

/// Parse an optional filter value, reporting unknown codes.
pub(crate) fn parse_filter<T>(
    raw: Option<&str>,
    what: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> AppResult<Option<T>> {
    match raw {
        None => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("all") => Ok(None),
        Some(v) => parse(v)
            .map(Some)
            .ok_or_else(|| AppError::InvalidFilter(format!("unknown {what}: {v}"))),
    }
}

/// Machine-readable output to stdout. `Table` is handled by the caller.
pub(crate) fn print_serialized<T: Serialize>(items: &[T], format: OutputFormat) -> AppResult<()> {
    let stdout = io::stdout().lock();
    match format {
        OutputFormat::Json => write_json(items, stdout),
        OutputFormat::Csv => write_csv(items, stdout),
        OutputFormat::Table => Ok(()),
    }
}

pub(crate) fn as_export_format(format: OutputFormat) -> Option<ExportFormat> {
    match format {
        OutputFormat::Json => Some(ExportFormat::Json),
        OutputFormat::Csv => Some(ExportFormat::Csv),
        OutputFormat::Table => None,
    }
}
