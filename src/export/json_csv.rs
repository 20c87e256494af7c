// src/export/json_csv.rs

use crate::errors::AppResult;
use serde::Serialize;
use std::io::Write;

/// Pretty-printed JSON array.
pub fn write_json<T: Serialize, W: Write>(items: &[T], mut out: W) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, items)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// CSV with a header row derived from the field names.
pub fn write_csv<T: Serialize, W: Write>(items: &[T], out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for item in items {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}
