//! Console preview of a loaded table

use crate::types::Table;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

/// Summary lines printed ahead of the table body.
///
/// `raw_sheet` is the selector exactly as the user typed it.
pub fn render_summary(file: &Path, raw_sheet: &str, table: &Table) -> String {
    format!(
        "File: {}\nSheet: {}\nRows: {}, Columns: {}\nColumns: {}\n",
        file.display(),
        raw_sheet,
        table.row_count(),
        table.column_count(),
        table.columns.join(", ")
    )
}

/// Render the header and the first `limit` rows as right-aligned text columns
pub fn render_table(table: &Table, limit: usize) -> String {
    if table.is_empty() {
        return "Empty table\n".to_string();
    }

    let body: Vec<Vec<String>> = table
        .head(limit)
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.width()).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &table.columns, &widths);
    for row in &body {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    for (idx, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if idx > 0 {
            out.push_str(COLUMN_GAP);
        }
        // Pad by display width so wide (CJK) characters stay aligned
        let pad = width.saturating_sub(cell.width());
        out.extend(std::iter::repeat(' ').take(pad));
        out.push_str(cell);
    }
    out.push('\n');
}
