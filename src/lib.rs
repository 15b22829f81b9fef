//! Sheetpeek - quick look at an Excel sheet from the terminal
//!
//! Finds a workbook (an explicit file, or the newest Excel file in a
//! directory), loads one sheet into a [`Table`], prints a preview and can
//! export the whole table to CSV or JSON.
//!
//! # Example
//!
//! ```no_run
//! use sheetpeek::excel::load_sheet;
//! use sheetpeek::resolver::resolve;
//! use sheetpeek::types::SheetSelector;
//! use std::path::Path;
//!
//! let file = resolve(Path::new("reports/"))?;
//! let table = load_sheet(file.path(), &SheetSelector::parse("Summary"))?;
//!
//! println!("Rows: {}", table.row_count());
//! println!("Columns: {}", table.columns.join(", "));
//! # Ok::<(), sheetpeek::error::PeekError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod preview;
pub mod resolver;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{PeekError, PeekResult};
pub use types::{CellValue, SheetSelector, Table};
