#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use tkdash::models::{BreakdownRow, LocationEntry};

/// Fixed "today" so the generated dataset is the same on every run.
pub const ANCHOR: &str = "2026-02-12";

pub fn tkd() -> Command {
    cargo_bin_cmd!("tkdash")
}

/// Command bound to a per-test config path (which may not exist) and the fixed anchor.
pub fn tkd_with(cfg_path: &str) -> Command {
    let mut cmd = tkd();
    cmd.args(["--config", cfg_path, "--anchor", ANCHOR]);
    cmd
}

/// Unique config path inside the system temp dir; any previous file is removed.
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tkdash.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tkdash_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temp file and return its path.
pub fn temp_input(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tkdash_in.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write test input");
    p
}

pub fn row(name: &str, value: f64) -> BreakdownRow {
    BreakdownRow::new(name, value, "")
}

pub fn entry(timestamp: &str, lat: Option<f64>, lng: Option<f64>, address: Option<&str>) -> LocationEntry {
    LocationEntry {
        timestamp: timestamp.to_string(),
        lat,
        lng,
        address: address.map(str::to_string),
    }
}
