use super::{as_export_format, parse_filter, print_page_footer};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::RecordFilter;
use crate::data::Dataset;
use crate::errors::AppResult;
use crate::export::ExportRows;
use crate::models::{LocationStatus, RecordStatus, TimekeepingRecord};
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_location, color_for_status, colorize_optional, paint};
use crate::utils::table::{Column, Table};
use std::io;

/// Handle the `records` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Records {
        range,
        search,
        status,
        location,
        page,
        format,
    } = cmd
    {
        let filter = RecordFilter {
            range: Some(range.resolve(cfg)?),
            search: search.clone().unwrap_or_default(),
            status: parse_filter(status.as_deref(), "status", RecordStatus::from_code)?,
            location: parse_filter(location.as_deref(), "location", LocationStatus::from_code)?,
        };

        let data = Dataset::generate(cfg.anchor());
        let matching = filter.apply(&data.records);
        let pagination = page.pagination(matching.len(), cfg);
        let rows = pagination.slice(&matching);

        if let Some(fmt) = as_export_format(*format) {
            return ExportRows::Records(rows.to_vec()).write(fmt, io::stdout().lock());
        }

        if let Some(r) = &filter.range {
            header(format!("Time records {r}"));
        }
        if rows.is_empty() {
            info("No time records match the filters.");
            return Ok(());
        }

        print!("{}", render(rows, cfg));
        print_page_footer(&pagination);
    }
    Ok(())
}

fn render(rows: &[&TimekeepingRecord], cfg: &Config) -> String {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("EMPLOYEE"),
        Column::new("SCHEDULE"),
        Column::new("IN"),
        Column::new("IN LOC"),
        Column::new("BREAK"),
        Column::new("OUT"),
        Column::new("OUT LOC"),
        Column::new("WORKED"),
        Column::new("LATE"),
        Column::new("STATUS"),
    ])
    .with_separator(&cfg.separator_char);

    for r in rows {
        let late = if r.late_minutes > 0 {
            format!("{} min", r.late_minutes)
        } else {
            "-".to_string()
        };
        let brk = if r.break_in == "-" {
            "-".to_string()
        } else {
            format!("{}-{}", r.break_in, r.break_out)
        };

        table.add_row(vec![
            r.id.clone(),
            r.employee_name.clone(),
            format!("{}-{}", r.scheduled_start, r.scheduled_end),
            colorize_optional(&r.actual_time_in),
            location_cell(r.time_in_location, r.time_in_distance),
            colorize_optional(&brk),
            colorize_optional(&r.actual_time_out),
            location_cell(r.time_out_location, r.time_out_distance),
            colorize_optional(&r.worked_duration),
            colorize_optional(&late),
            paint(color_for_status(r.status), r.status.label()),
        ]);
    }

    table.render()
}

fn location_cell(status: LocationStatus, distance: Option<f64>) -> String {
    let text = match (status, distance) {
        (LocationStatus::NoData, _) | (_, None) => status.as_str().to_string(),
        (_, Some(d)) => format!("{} {}m", status.as_str(), d.round()),
    };
    paint(color_for_location(status), &text)
}
