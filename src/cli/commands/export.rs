use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{LogFilter, RecordFilter};
use crate::data::Dataset;
use crate::errors::AppResult;
use crate::export::{ExportKind, ExportRows, export_to_file};
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `export` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        what,
        format,
        file,
        range,
        force,
    } = cmd
    {
        // Without range flags the whole history is exported.
        let window = if range.is_set() {
            Some(range.resolve(cfg)?)
        } else {
            None
        };

        let data = Dataset::generate(cfg.anchor());
        let rows = match what {
            ExportKind::Records => ExportRows::Records(
                RecordFilter {
                    range: window,
                    ..Default::default()
                }
                .apply(&data.records),
            ),
            ExportKind::Users => {
                if window.is_some() {
                    warning("Users are not dated; the range is ignored.");
                }
                ExportRows::Users(data.users.iter().collect())
            }
            ExportKind::Logs => ExportRows::Logs(
                LogFilter {
                    range: window,
                    ..Default::default()
                }
                .apply(&data.activity_logs),
            ),
            ExportKind::Breaklists => {
                if window.is_some() {
                    warning("Breaklists are filtered by status, not by date; the range is ignored.");
                }
                ExportRows::Breaklists(data.breaklists.iter().collect())
            }
        };

        let path = Path::new(file);
        let written = export_to_file(&rows, *format, path, *force)?;
        success(format!(
            "{} export completed: {} rows → {}",
            format.as_str().to_uppercase(),
            written,
            path.display()
        ));
    }
    Ok(())
}
