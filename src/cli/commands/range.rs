use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{RangePreset, format_date, get_preset_range, resolve_range};
use crate::utils::table::{Column, Table};

/// Handle the `range` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Range { preset, from, to } = cmd {
        let anchor = format_date(cfg.anchor());

        if preset.is_none() && from.is_none() && to.is_none() {
            let mut table = Table::new(vec![
                Column::new("PRESET"),
                Column::new("LABEL"),
                Column::new("START"),
                Column::new("END"),
                Column::new("DAYS"),
            ])
            .with_separator(&cfg.separator_char);

            for p in RangePreset::ALL {
                let r = get_preset_range(p.as_str(), &anchor);
                table.add_row(vec![
                    p.as_str().to_string(),
                    p.label().to_string(),
                    r.start.clone(),
                    r.end.clone(),
                    r.dates().len().to_string(),
                ]);
            }
            print!("{}", table.render());
            return Ok(());
        }

        let range = resolve_range(
            preset.as_deref(),
            from.as_deref(),
            to.as_deref(),
            cfg.anchor(),
            &cfg.default_range,
        )?;

        if range.is_empty() {
            return Err(AppError::InvalidRange(format!(
                "nothing to resolve from anchor {anchor}"
            )));
        }

        println!("{} {}", range.start, range.end);
    }
    Ok(())
}
