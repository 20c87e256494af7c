use super::{as_export_format, parse_filter, print_page_footer};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::LogFilter;
use crate::data::Dataset;
use crate::errors::AppResult;
use crate::export::ExportRows;
use crate::models::{ActivityCategory, StoreKey};
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_outcome, paint};
use crate::utils::table::{Column, Table};
use std::io;

/// Handle the `logs` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Logs {
        range,
        search,
        category,
        store,
        page,
        format,
    } = cmd
    {
        let filter = LogFilter {
            range: Some(range.resolve(cfg)?),
            search: search.clone().unwrap_or_default(),
            category: parse_filter(category.as_deref(), "category", ActivityCategory::from_code)?,
            store: parse_filter(store.as_deref(), "store", StoreKey::from_code)?,
        };

        let data = Dataset::generate(cfg.anchor());
        let matching = filter.apply(&data.activity_logs);
        let pagination = page.pagination(matching.len(), cfg);
        let rows = pagination.slice(&matching);

        if let Some(fmt) = as_export_format(*format) {
            return ExportRows::Logs(rows.to_vec()).write(fmt, io::stdout().lock());
        }

        if let Some(r) = &filter.range {
            header(format!("Activity logs {r}"));
        }
        if rows.is_empty() {
            info("No activity logs match the filters.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("TIMESTAMP"),
            Column::new("USER"),
            Column::new("ROLE"),
            Column::new("EMPLOYEE"),
            Column::new("ACTIVITY"),
            Column::new("CATEGORY"),
            Column::new("STATUS"),
            Column::new("STORE"),
            Column::wrapped("DETAILS", 40),
        ])
        .with_separator(&cfg.separator_char);

        for l in rows {
            table.add_row(vec![
                l.timestamp.clone(),
                l.user.clone(),
                l.role.clone(),
                l.affected_employee.clone(),
                l.activity.clone(),
                l.category.as_str().to_string(),
                paint(color_for_outcome(l.status), l.status.as_str()),
                l.store_key.as_str().to_string(),
                l.details.clone(),
            ]);
        }

        print!("{}", table.render());
        print_page_footer(&pagination);
    }
    Ok(())
}
