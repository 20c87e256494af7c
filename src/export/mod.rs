// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;

pub use json_csv::{write_csv, write_json};
pub use model::RecordExport;

use crate::errors::AppResult;
use crate::models::{ActivityLogEntry, Breaklist, DashboardUser, TimekeepingRecord};
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// How a listing is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// File formats for `export`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Which dashboard table to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    Records,
    Users,
    Logs,
    Breaklists,
}

/// Rows of one of the dashboard tables, ready for serialization.
pub enum ExportRows<'a> {
    Records(Vec<&'a TimekeepingRecord>),
    Users(Vec<&'a DashboardUser>),
    Logs(Vec<&'a ActivityLogEntry>),
    Breaklists(Vec<&'a Breaklist>),
}

impl ExportRows<'_> {
    pub fn len(&self) -> usize {
        match self {
            ExportRows::Records(r) => r.len(),
            ExportRows::Users(u) => u.len(),
            ExportRows::Logs(l) => l.len(),
            ExportRows::Breaklists(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn write<W: Write>(&self, format: ExportFormat, out: W) -> AppResult<()> {
        match (self, format) {
            (ExportRows::Records(r), ExportFormat::Json) => write_json(r, out),
            (ExportRows::Records(r), ExportFormat::Csv) => {
                let flat: Vec<RecordExport> = r.iter().map(|rec| RecordExport::from(*rec)).collect();
                write_csv(&flat, out)
            }
            (ExportRows::Users(u), ExportFormat::Json) => write_json(u, out),
            (ExportRows::Users(u), ExportFormat::Csv) => write_csv(u, out),
            (ExportRows::Logs(l), ExportFormat::Json) => write_json(l, out),
            (ExportRows::Logs(l), ExportFormat::Csv) => write_csv(l, out),
            (ExportRows::Breaklists(b), ExportFormat::Json) => write_json(b, out),
            (ExportRows::Breaklists(b), ExportFormat::Csv) => write_csv(b, out),
        }
    }
}

/// Write `rows` to `path`. Returns the number of rows written.
pub fn export_to_file(rows: &ExportRows<'_>, format: ExportFormat, path: &Path, force: bool) -> AppResult<usize> {
    fs_utils::ensure_writable(path, force)?;

    let file = File::create(path)?;
    rows.write(format, BufWriter::new(file))?;

    tracing::info!(path = %path.display(), rows = rows.len(), format = format.as_str(), "export written");
    Ok(rows.len())
}
