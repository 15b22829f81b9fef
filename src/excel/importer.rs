//! Excel importer implementation - one worksheet → Table

use crate::error::{PeekError, PeekResult};
use crate::types::{CellValue, SheetSelector, Table};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads a single worksheet from an Excel workbook (.xlsx, .xlsm, .xls)
pub struct ExcelImporter {
    path: PathBuf,
}

impl ExcelImporter {
    /// Create a new Excel importer
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the selected sheet into a Table.
    ///
    /// The first row of the sheet's used range is the header row.
    pub fn load(&self, selector: &SheetSelector) -> PeekResult<Table> {
        let mut workbook = open_workbook_auto(&self.path)?;
        let sheet_names = workbook.sheet_names();

        let sheet_name = match selector {
            SheetSelector::Index(index) => sheet_names.get(*index).cloned().ok_or(
                PeekError::SheetIndexOutOfRange {
                    index: *index,
                    count: sheet_names.len(),
                },
            )?,
            SheetSelector::Name(name) => {
                if !sheet_names.iter().any(|s| s == name) {
                    return Err(PeekError::SheetNotFound {
                        name: name.clone(),
                        available: sheet_names,
                    });
                }
                name.clone()
            }
        };

        debug!(sheet = %sheet_name, file = %self.path.display(), "reading worksheet");
        let range = workbook.worksheet_range(&sheet_name)?;
        let table = range_to_table(&range);
        debug!(
            rows = table.row_count(),
            columns = table.column_count(),
            "worksheet loaded"
        );
        Ok(table)
    }
}

/// Convenience wrapper around [`ExcelImporter::load`]
pub fn load_sheet<P: AsRef<Path>>(path: P, selector: &SheetSelector) -> PeekResult<Table> {
    ExcelImporter::new(path).load(selector)
}

fn range_to_table(range: &Range<Data>) -> Table {
    if range.is_empty() {
        return Table::default();
    }

    // The used range may begin right of column A; pad so columns stay absolute
    let lead = range.start().map(|(_, col)| col as usize).unwrap_or(0);
    let mut rows = range.rows().map(|row| {
        let mut cells = vec![Data::Empty; lead];
        cells.extend_from_slice(row);
        cells
    });

    let header = match rows.next() {
        Some(header) => header,
        None => return Table::default(),
    };

    let mut table = Table::new(column_names(&header));
    for row in rows {
        table.push_row(row.iter().map(CellValue::from).collect());
    }
    table
}

/// Build unique column names from the header row.
///
/// Blank headers become `Unnamed: <i>`; repeated names get `.1`, `.2`, …
fn column_names(header: &[Data]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::with_capacity(header.len());

    for (idx, cell) in header.iter().enumerate() {
        let base = match cell {
            Data::Empty => format!("Unnamed: {}", idx),
            Data::String(s) if s.trim().is_empty() => format!("Unnamed: {}", idx),
            other => CellValue::from(other).to_string(),
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while seen.contains(&name) {
            name = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        seen.insert(name.clone());
        names.push(name);
    }

    names
}
