use super::{as_export_format, parse_filter, print_page_footer};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::UserFilter;
use crate::data::Dataset;
use crate::errors::AppResult;
use crate::export::ExportRows;
use crate::models::AccountStatus;
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_account, paint};
use crate::utils::table::{Column, Table};
use std::io;

/// Handle the `users` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Users {
        search,
        company,
        role,
        status,
        page,
        format,
    } = cmd
    {
        let filter = UserFilter {
            search: search.clone().unwrap_or_default(),
            company: company.clone().filter(|c| !c.eq_ignore_ascii_case("all")),
            role: role.clone().filter(|r| !r.eq_ignore_ascii_case("all")),
            status: parse_filter(status.as_deref(), "account status", AccountStatus::from_code)?,
        };

        let data = Dataset::generate(cfg.anchor());
        let matching = filter.apply(&data.users);
        let pagination = page.pagination(matching.len(), cfg);
        let rows = pagination.slice(&matching);

        if let Some(fmt) = as_export_format(*format) {
            return ExportRows::Users(rows.to_vec()).write(fmt, io::stdout().lock());
        }

        header("Users");
        if rows.is_empty() {
            info("No users match the filters.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID"),
            Column::new("NAME"),
            Column::new("EMAIL"),
            Column::new("COMPANY"),
            Column::new("ROLE"),
            Column::new("STORE"),
            Column::new("VERIFIED"),
            Column::new("STATUS"),
            Column::new("DOCS"),
            Column::new("LAST TIME IN"),
        ])
        .with_separator(&cfg.separator_char);

        for u in rows {
            table.add_row(vec![
                u.id.clone(),
                u.name.clone(),
                u.email.clone(),
                u.company.clone(),
                u.role.clone(),
                u.assigned_store.clone(),
                u.verification_status.as_str().to_string(),
                paint(color_for_account(u.account_status), u.account_status.as_str()),
                u.missing_documents.to_string(),
                u.last_time_in.clone(),
            ]);
        }

        print!("{}", table.render());
        print_page_footer(&pagination);
    }
    Ok(())
}
