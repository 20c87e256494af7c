//! Table rendering for CLI listings.
//!
//! Column widths follow the widest cell (display width, so accents and
//! emoji line up) unless a column has a fixed width, in which case longer
//! cells are wrapped.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"));

pub struct Column {
    pub header: String,
    /// Wrap cells to this width; `None` sizes the column to its content.
    pub wrap: Option<usize>,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            wrap: None,
        }
    }

    pub fn wrapped(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            wrap: Some(width),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    separator: char,
}

/// Display width ignoring ANSI color and erase-line sequences.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(&*strip_ansi(s))
}

fn strip_ansi(s: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(s, "")
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(cell));
    format!("{cell}{}", " ".repeat(fill))
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: '-',
        }
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.chars().next().unwrap_or('-');
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let content = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .max()
                    .unwrap_or(0);
                let natural = content.max(visible_width(&col.header));
                match col.wrap {
                    Some(w) => natural.min(w.max(visible_width(&col.header))),
                    None => natural,
                }
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(&c.header, *w))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');

        for row in &self.rows {
            // A wrapped cell spreads the row over several physical lines.
            let cells: Vec<Vec<String>> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let cell = row.get(i).map(String::as_str).unwrap_or("");
                    match col.wrap {
                        Some(_) if visible_width(cell) > widths[i] => textwrap::wrap(cell, widths[i])
                            .into_iter()
                            .map(|l| l.into_owned())
                            .collect(),
                        _ => vec![cell.to_string()],
                    }
                })
                .collect();

            let height = cells.iter().map(Vec::len).max().unwrap_or(1);
            for line in 0..height {
                let parts: Vec<String> = cells
                    .iter()
                    .zip(&widths)
                    .map(|(c, w)| pad(c.get(line).map(String::as_str).unwrap_or(""), *w))
                    .collect();
                out.push_str(parts.join("  ").trim_end());
                out.push('\n');
            }
        }

        out
    }
}
