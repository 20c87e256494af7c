use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::check_keys;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        init,
        force,
    } = cmd
    {
        if *init {
            Config::write_defaults(path, *force)?;
            success(format!("Config file: {}", path.display()));
        }

        if *print_config {
            println!("# {}", path.display());
            print!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            if !path.exists() {
                warning(format!(
                    "{} does not exist; defaults are in use (create it with --init)",
                    path.display()
                ));
                return Ok(());
            }

            let report = check_keys(&fs::read_to_string(path)?)?;
            if report.is_clean() {
                success("Configuration file is complete.");
            }
            for key in &report.missing {
                warning(format!("missing key '{key}' (default applies)"));
            }
            for key in &report.unknown {
                warning(format!("unknown key '{key}' is ignored"));
            }
        }

        if !*init && !*print_config && !*check {
            info(format!("Config file: {}", path.display()));
            info("Use --print, --check or --init.");
        }
    }
    Ok(())
}
