// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text table renderer for list views.

use std::io::Write;

/// Column text alignment.
pub enum Align {
    Left,
    Right,
}

/// A column definition in a [`Table`].
pub struct Column {
    pub name: &'static str,
    pub align: Align,
    /// Maximum width (`None` = unlimited). Values exceeding this are truncated.
    pub max_width: Option<usize>,
}

impl Column {
    pub fn left(name: &'static str) -> Self {
        Self {
            name,
            align: Align::Left,
            max_width: None,
        }
    }

    pub fn right(name: &'static str) -> Self {
        Self {
            name,
            align: Align::Right,
            max_width: None,
        }
    }

    /// Set maximum width (values exceeding this are truncated).
    pub fn with_max(mut self, max: usize) -> Self {
        self.max_width = Some(max);
        self
    }
}

/// A tabular renderer that auto-computes column widths from data.
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

/// Column separator: double space.
const SEP: &str = "  ";

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Render header and rows. The last column is never padded when
    /// left-aligned.
    pub fn render(&self, out: &mut impl Write) {
        if self.rows.is_empty() {
            return;
        }

        let widths = self.compute_widths();
        let header: Vec<&str> = self.columns.iter().map(|c| c.name).collect();
        let _ = writeln!(out, "{}", self.format_row(&header, &widths));

        for row in &self.rows {
            let cells: Vec<&str> = (0..self.columns.len())
                .map(|i| row.get(i).map(|s| s.as_str()).unwrap_or(""))
                .collect();
            let _ = writeln!(out, "{}", self.format_row(&cells, &widths));
        }
    }

    fn format_row(&self, cells: &[&str], widths: &[usize]) -> String {
        let last = self.columns.len() - 1;
        self.columns
            .iter()
            .zip(cells)
            .enumerate()
            .map(|(i, (col, raw))| {
                let text = truncate(raw, col.max_width);
                if i == last && matches!(col.align, Align::Left) {
                    text.to_string()
                } else {
                    pad(text, widths[i], &col.align)
                }
            })
            .collect::<Vec<_>>()
            .join(SEP)
    }

    fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let max_data = self
                    .rows
                    .iter()
                    .map(|row| {
                        let raw = row.get(i).map(|s| s.len()).unwrap_or(0);
                        col.max_width.map_or(raw, |mw| raw.min(mw))
                    })
                    .max()
                    .unwrap_or(0);
                col.name.len().max(max_data)
            })
            .collect()
    }
}

fn pad(text: &str, width: usize, align: &Align) -> String {
    match align {
        Align::Left => format!("{:<width$}", text),
        Align::Right => format!("{:>width$}", text),
    }
}

/// Truncate to at most `max` characters, on a char boundary.
fn truncate(s: &str, max: Option<usize>) -> &str {
    match max {
        Some(m) if s.chars().count() > m => {
            let end = s.char_indices().nth(m).map_or(s.len(), |(i, _)| i);
            &s[..end]
        }
        _ => s,
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
