//! small text helpers used when rendering frames

use crate::df::Cell;

/// formats `cell` for display, `float_precision` only affects float cells
pub fn format_cell(cell: &Cell, float_precision: Option<usize>) -> String {
    match (cell, float_precision) {
        (Cell::Float(v), Some(precision)) => format!("{v:.precision$}"),
        _ => cell.to_string(),
    }
}

/// number of characters (not bytes) in `text`
#[inline]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// right-aligns `text` within `width` characters
pub fn pad_left(text: &str, width: usize) -> String {
    format!("{text:>width$}")
}
