use super::print_serialized;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::breakdown::{rows_from_json, sort_breakdown_rows, sum_breakdown_values};
use crate::errors::AppResult;
use crate::export::OutputFormat;
use crate::ui::messages::info;
use crate::utils::formatting::format_value;
use crate::utils::table::{Column, Table};
use std::fs;

/// Handle the `breakdown` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Breakdown { file, format } = cmd {
        let content = fs::read_to_string(file)?;
        let rows = sort_breakdown_rows(&rows_from_json(&content));
        let total = sum_breakdown_values(&rows);

        if *format != OutputFormat::Table {
            return print_serialized(&rows, *format);
        }

        if rows.is_empty() {
            info("No breakdown rows found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("#"),
            Column::new("USER"),
            Column::new("VALUE"),
            Column::new("INFO"),
        ])
        .with_separator(&cfg.separator_char);

        for (i, row) in rows.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                row.user_name.clone(),
                format_value(row.numeric_value()),
                row.secondary_info.clone(),
            ]);
        }
        print!("{}", table.render());
        println!("Total: {}", format_value(total));
    }
    Ok(())
}
