//! User-facing status lines. Diagnostics go through `tracing` instead.

use crate::utils::colors::{BLUE, GREEN, RED, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}ℹ️{RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}{BOLD}✅{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{YELLOW}{BOLD}⚠️{RESET} {msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}{BOLD}❌{RESET} {msg}");
}

/// Section title above a table or card block.
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{BLUE}{BOLD}=== {msg} ==={RESET}");
}

/// One KPI card line: `Late Users ............ 5  (12 records)`.
pub fn kpi_line<T: fmt::Display>(title: &str, value: T, note: Option<&str>) {
    let dots = ".".repeat(28usize.saturating_sub(title.chars().count()));
    match note {
        Some(n) => println!("  {title} {dots} {BOLD}{value}{RESET}  {n}"),
        None => println!("  {title} {dots} {BOLD}{value}{RESET}"),
    }
}
