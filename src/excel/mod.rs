//! Excel import module
//!
//! Reads one worksheet of an .xlsx, .xlsm or .xls workbook into a [`Table`].
//! The first row of the sheet's used range provides the column names.
//!
//! [`Table`]: crate::types::Table

mod importer;

pub use importer::{load_sheet, ExcelImporter};
