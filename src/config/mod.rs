use crate::core::pagination::DEFAULT_PAGE_SIZE;
use crate::errors::{AppError, AppResult};
use crate::models::GeoPoint;
use crate::utils::date::{self, parse_date_or_none};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Fixed "today" (YYYY-MM-DD) for the dataset and presets; system date if unset.
    #[serde(default)]
    pub anchor_date: Option<String>,
    #[serde(default = "default_range")]
    pub default_range: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_radius")]
    pub geofence_radius_m: f64,
    #[serde(default = "GeoPoint::office")]
    pub office: GeoPoint,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_range() -> String {
    "today".to_string()
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_radius() -> f64 {
    100.0
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anchor_date: None,
            default_range: default_range(),
            page_size: default_page_size(),
            geofence_radius_m: default_radius(),
            office: GeoPoint::office(),
            log_level: default_log_level(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// `~/.tkdash`, or `./.tkdash` when no home directory is known.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tkdash")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tkdash.conf")
    }

    /// Resolve the file to use: `--config` if given, the standard path otherwise.
    pub fn path_for(custom: Option<&str>) -> PathBuf {
        custom.map(PathBuf::from).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if let Some(a) = &self.anchor_date
            && parse_date_or_none(a).is_none()
        {
            return Err(AppError::Config(format!("anchor_date is not a date: {a}")));
        }
        if date::RangePreset::from_name(&self.default_range).is_none() {
            return Err(AppError::Config(format!(
                "default_range is not a known preset: {}",
                self.default_range
            )));
        }
        if !(self.geofence_radius_m.is_finite() && self.geofence_radius_m > 0.0) {
            return Err(AppError::Config(format!(
                "geofence_radius_m must be positive, got {}",
                self.geofence_radius_m
            )));
        }
        Ok(())
    }

    /// The date the dashboard treats as today.
    pub fn anchor(&self) -> NaiveDate {
        self.anchor_date
            .as_deref()
            .and_then(parse_date_or_none)
            .unwrap_or_else(date::today)
    }

    /// Write the default configuration. Existing files are kept unless `force`.
    pub fn write_defaults(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())?;
        fs::write(path, yaml)?;
        Ok(())
    }
}
