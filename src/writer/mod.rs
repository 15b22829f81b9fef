use crate::error::{PeekError, PeekResult};
use crate::types::Table;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Export format, chosen from the output file's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Pick the format from the extension (case-insensitive)
    pub fn from_path(path: &Path) -> PeekResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(ExportFormat::Csv),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ExportFormat::Json),
            _ => Err(PeekError::UnsupportedOutput(path.to_path_buf())),
        }
    }
}

/// Write the full table to `path`; the format follows the extension.
///
/// Unsupported extensions fail before the file is created.
pub fn export_table(table: &Table, path: &Path) -> PeekResult<ExportFormat> {
    let format = ExportFormat::from_path(path)?;
    let file = File::create(path)?;
    match format {
        ExportFormat::Csv => write_csv(table, file)?,
        ExportFormat::Json => write_json(table, file)?,
    }
    debug!(output = %path.display(), ?format, rows = table.row_count(), "table exported");
    Ok(format)
}

/// Comma-separated values with a header row and no index column
pub fn write_csv<W: Write>(table: &Table, out: W) -> PeekResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    if !table.columns.is_empty() {
        writer.write_record(&table.columns)?;
    }
    for row in &table.rows {
        writer.write_record(row.iter().map(|cell| cell.to_field()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Pretty-printed array of row objects; non-ASCII text is written as-is
pub fn write_json<W: Write>(table: &Table, out: W) -> PeekResult<()> {
    let mut out = BufWriter::new(out);
    serde_json::to_writer_pretty(&mut out, table)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
