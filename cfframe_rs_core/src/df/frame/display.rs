use super::DataFrame;
use crate::toolkit::fmt::{display_width, format_cell, pad_left};
use std::fmt;

/// Options used by [`DataFrame::render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// every column is at least this wide
    pub min_column_width: usize,
    /// number of spaces between two columns
    pub column_spacing: usize,
    /// fixed number of decimals for float cells, `None` for the shortest exact form
    pub float_precision: Option<usize>,
    /// maximum number of rows to render, `None` renders all of them
    pub max_rows: Option<usize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            min_column_width: 1,
            column_spacing: 1,
            float_precision: None,
            max_rows: None,
        }
    }
}

impl DisplayConfig {
    #[must_use]
    pub fn with_min_column_width(mut self, width: usize) -> Self {
        self.min_column_width = width;
        self
    }

    #[must_use]
    pub fn with_column_spacing(mut self, spacing: usize) -> Self {
        self.column_spacing = spacing;
        self
    }

    #[must_use]
    pub fn with_float_precision(mut self, precision: usize) -> Self {
        self.float_precision = Some(precision);
        self
    }

    #[must_use]
    pub fn with_max_rows(mut self, rows: usize) -> Self {
        self.max_rows = Some(rows);
        self
    }
}

fn push_line<'a>(
    out: &mut String,
    texts: impl Iterator<Item = &'a str>,
    widths: &[usize],
    separator: &str,
) {
    let line = texts
        .zip(widths)
        .map(|(text, &width)| pad_left(text, width))
        .collect::<Vec<_>>()
        .join(separator);
    out.push_str(&line);
    out.push('\n');
}

impl DataFrame {
    /// renders the header line followed by one line per row
    ///
    /// unnamed columns use their position as header, and every column is
    /// right-aligned to its widest entry.
    pub fn render(&self, config: &DisplayConfig) -> String {
        let shown = config.max_rows.map_or(self.nrow, |max| max.min(self.nrow));
        let headers: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| column.get_header().map_or_else(|| i.to_string(), str::to_string))
            .collect();
        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|column| {
                (0..shown)
                    .map(|row| format_cell(&column.cell_at(row), config.float_precision))
                    .collect()
            })
            .collect();
        let widths: Vec<usize> = headers
            .iter()
            .zip(&cells)
            .map(|(header, column)| {
                column
                    .iter()
                    .map(|text| display_width(text))
                    .chain([display_width(header), config.min_column_width])
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let separator = " ".repeat(config.column_spacing);
        let mut out = String::new();
        push_line(&mut out, headers.iter().map(String::as_str), &widths, &separator);
        for row in 0..shown {
            push_line(
                &mut out,
                cells.iter().map(|column| column[row].as_str()),
                &widths,
                &separator,
            );
        }
        if shown < self.nrow {
            out.push_str("...\n");
        }
        out
    }

    /// prints [`DataFrame::render`] with the default [`DisplayConfig`] to stdout
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&DisplayConfig::default()))
    }
}
