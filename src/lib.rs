//! tkdash library root.
//! Exposes the CLI parser, the reporting helpers and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use std::path::Path;
use ui::messages::warning;
use utils::date::{format_date, parse_date_or_none};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Range { .. } => cli::commands::range::handle(&cli.command, cfg),
        Commands::Overview { .. } => cli::commands::overview::handle(&cli.command, cfg),
        Commands::Records { .. } => cli::commands::records::handle(&cli.command, cfg),
        Commands::Users { .. } => cli::commands::users::handle(&cli.command, cfg),
        Commands::Logs { .. } => cli::commands::logs::handle(&cli.command, cfg),
        Commands::Breaklists { .. } => cli::commands::breaklists::handle(&cli.command, cfg),
        Commands::Location { .. } => cli::commands::location::handle(&cli.command, cfg),
        Commands::MapsUrl { .. } => cli::commands::maps_url::handle(&cli.command, cfg),
        Commands::Breakdown { .. } => cli::commands::breakdown::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg_path = Config::path_for(cli.config.as_deref());

    // The config command must still work on a broken file so it can be checked or replaced.
    let mut cfg = match Config::load_from(&cfg_path) {
        Ok(cfg) => cfg,
        Err(e) if matches!(cli.command, Commands::Config { .. }) => {
            warning(format!("{e}; showing defaults"));
            Config::default()
        }
        Err(e) => return Err(e),
    };

    if let Some(anchor) = &cli.anchor {
        let date = parse_date_or_none(anchor).ok_or_else(|| AppError::InvalidDate(anchor.clone()))?;
        cfg.anchor_date = Some(format_date(date));
    }

    logging::init(cli.verbose, &cfg.log_level);
    tracing::debug!(config = %cfg_path.display(), anchor = %cfg.anchor(), "starting");

    dispatch(&cli, &cfg, &cfg_path)
}
