use super::{as_export_format, parse_filter, print_page_footer};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::breaklist::{APPROVER, Decision, decide_by_id, status_counts};
use crate::core::filter::BreaklistFilter;
use crate::data::Dataset;
use crate::errors::AppResult;
use crate::export::ExportRows;
use crate::models::{BreaklistStatus, StoreKey};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{color_for_breaklist, colorize_optional, paint};
use crate::utils::table::{Column, Table};
use std::io;

/// Handle the `breaklists` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Breaklists {
        search,
        store,
        status,
        approve,
        reject,
        page,
        format,
    } = cmd
    {
        let filter = BreaklistFilter {
            search: search.clone().unwrap_or_default(),
            store: parse_filter(store.as_deref(), "store", StoreKey::from_code)?,
            status: parse_filter(status.as_deref(), "breaklist status", BreaklistStatus::from_code)?,
        };

        let mut data = Dataset::generate(cfg.anchor());

        let decision = match (approve, reject) {
            (Some(id), _) => Some((id, Decision::Approve)),
            (None, Some(id)) => Some((id, Decision::Reject)),
            (None, None) => None,
        };
        if let Some((id, decision)) = decision {
            let now = chrono::Local::now().naive_local();
            let list = decide_by_id(&mut data.breaklists, id, decision, APPROVER, now)?;
            success(format!(
                "Breaklist {} ({}, {}) {} by {}",
                list.id,
                list.store,
                list.date_range,
                list.status.as_str(),
                list.approved_by
            ));
            warning("Breaklists are regenerated on every run; this decision is not saved.");
        }

        let matching = filter.apply(&data.breaklists);
        let pagination = page.pagination(matching.len(), cfg);
        let rows = pagination.slice(&matching);

        if let Some(fmt) = as_export_format(*format) {
            return ExportRows::Breaklists(rows.to_vec()).write(fmt, io::stdout().lock());
        }

        header("Generated breaklists");
        let counts = status_counts(&matching)
            .iter()
            .map(|(s, n)| format!("{} {n}", s.as_str()))
            .collect::<Vec<_>>()
            .join(" · ");
        info(counts);

        if rows.is_empty() {
            info("No breaklists match the filters.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID"),
            Column::new("STORE"),
            Column::new("PERIOD"),
            Column::new("EMPLOYEES"),
            Column::new("GENERATED BY"),
            Column::new("CREATED"),
            Column::new("STATUS"),
            Column::new("DECIDED"),
            Column::new("BY"),
            Column::new("NOTIFY"),
        ])
        .with_separator(&cfg.separator_char);

        for l in rows {
            table.add_row(vec![
                l.id.clone(),
                l.store.clone(),
                l.date_range.clone(),
                l.employee_count.to_string(),
                l.generated_by.clone(),
                l.created_at.clone(),
                paint(color_for_breaklist(l.status), l.status.as_str()),
                colorize_optional(&l.approved_at),
                colorize_optional(&l.approved_by),
                l.notification_recipient.clone(),
            ]);
        }

        print!("{}", table.render());
        print_page_footer(&pagination);
    }
    Ok(())
}
