use super::print_serialized;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::breakdown::sum_breakdown_values;
use crate::core::kpi::{Kpi, Overview, compute_overview};
use crate::data::Dataset;
use crate::errors::{AppError, AppResult};
use crate::export::OutputFormat;
use crate::models::BreakdownRow;
use crate::ui::messages::{header, info, kpi_line};
use crate::utils::colors::{YELLOW, paint};
use crate::utils::formatting::{format_value, percent};
use crate::utils::table::{Column, Table};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OverviewReport<'a> {
    overview: &'a Overview,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<BreakdownReport<'a>>,
}

#[derive(Serialize)]
struct BreakdownReport<'a> {
    kpi: &'static str,
    total: f64,
    rows: &'a [BreakdownRow],
}

/// Handle the `overview` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Overview {
        range,
        breakdown,
        format,
    } = cmd
    {
        let range = range.resolve(cfg)?;
        let kpi = match breakdown {
            Some(code) => Some(
                Kpi::from_code(code)
                    .ok_or_else(|| AppError::InvalidFilter(format!("unknown KPI: {code}")))?,
            ),
            None => None,
        };

        let data = Dataset::generate(cfg.anchor());
        let overview = compute_overview(&data.records, &range);
        let rows = kpi.map(|k| crate::core::kpi::breakdown(k, &data.records, &range));

        match format {
            OutputFormat::Json => {
                let report = OverviewReport {
                    overview: &overview,
                    breakdown: kpi.zip(rows.as_deref()).map(|(k, r)| BreakdownReport {
                        kpi: k.as_str(),
                        total: sum_breakdown_values(r),
                        rows: r,
                    }),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Csv => match &rows {
                Some(r) => print_serialized(r, *format)?,
                None => print_serialized(&overview.late_trend, *format)?,
            },
            OutputFormat::Table => {
                print_cards(&overview);
                print_trend(&overview, cfg);
                if let (Some(k), Some(r)) = (kpi, rows.as_deref()) {
                    print_breakdown(k, r, cfg);
                }
            }
        }
    }
    Ok(())
}

fn print_cards(o: &Overview) {
    header(format!("Overview {}", o.range));
    if o.total_records == 0 {
        info("No time records in the selected range.");
        return;
    }

    kpi_line("Total Active Users", o.active_users, None);
    kpi_line(
        Kpi::TimedIn.title(),
        o.timed_in_users,
        Some(&format!("{} of active", percent(o.timed_in_users, o.active_users))),
    );
    kpi_line(Kpi::NotTimedIn.title(), o.not_timed_in_users, None);
    kpi_line(Kpi::Late.title(), o.late_users, None);
    kpi_line(Kpi::OnTime.title(), o.on_time_users, None);
    kpi_line(Kpi::LocationViolations.title(), o.location_violations, None);

    header("Summary");
    kpi_line("On-Time Rate", format!("{:.1}%", o.on_time_rate), None);
    kpi_line(
        "Average Late Time",
        format!("{} min", o.average_late_minutes.round()),
        None,
    );
    kpi_line(
        "Location Compliance",
        format!("{:.1}%", o.location_compliance),
        Some(&format!("{} violations detected", o.location_violations)),
    );
}

fn print_trend(o: &Overview, cfg: &Config) {
    if o.late_trend.is_empty() {
        return;
    }
    header("Late Employees Trend");

    let peak = o.late_trend.iter().map(|p| p.count).max().unwrap_or(0);
    if peak == 0 {
        info("No late trend data for selected range.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("DATE"),
        Column::new("LATE"),
        Column::new(""),
    ])
    .with_separator(&cfg.separator_char);

    for p in &o.late_trend {
        let bar = "█".repeat((p.count * 30).div_ceil(peak));
        table.add_row(vec![p.label.clone(), p.count.to_string(), paint(YELLOW, &bar)]);
    }
    print!("{}", table.render());
}

fn print_breakdown(kpi: Kpi, rows: &[BreakdownRow], cfg: &Config) {
    header(format!("{} breakdown", kpi.title()));
    if rows.is_empty() {
        info("No users contributed to this KPI.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("#"),
        Column::new("USER"),
        Column::new("COUNT"),
        Column::new("DETAILS"),
    ])
    .with_separator(&cfg.separator_char);

    for (i, row) in rows.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            row.user_name.clone(),
            format_value(row.value),
            row.secondary_info.clone(),
        ]);
    }
    print!("{}", table.render());
    println!("Total: {}", format_value(sum_breakdown_values(rows)));
}
