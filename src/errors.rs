//! Unified application error type.
//! The reporting utilities never fail (they return neutral values);
//! AppError covers the outer layers: CLI, config, dataset lookups and export.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Unknown range preset: {0} (use today, this-week, this-2-weeks, this-month)")]
    InvalidPreset(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    // ---------------------------
    // Dataset lookups
    // ---------------------------
    #[error("No time record with id {0}")]
    UnknownRecord(String),

    #[error("No breaklist with id {0}")]
    UnknownBreaklist(String),

    #[error("Breaklist {id} is already {status}; only pending lists can be approved or rejected")]
    BreaklistDecided { id: String, status: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
