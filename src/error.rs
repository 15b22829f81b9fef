use std::path::PathBuf;
use thiserror::Error;

pub type PeekResult<T> = Result<T, PeekError>;

#[derive(Error, Debug)]
pub enum PeekError {
    #[error("Path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error(
        "Not an Excel file: {} (unsupported file type; expected .xlsx, .xls or .xlsm)",
        .0.display()
    )]
    UnsupportedFileType(PathBuf),

    #[error("No Excel files found in directory: {} (no spreadsheet files found)", .0.display())]
    NoSpreadsheets(PathBuf),

    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Sheet not found: '{name}' (available: {})", .available.join(", "))]
    SheetNotFound { name: String, available: Vec<String> },

    #[error("Sheet index {index} out of range (workbook has {count} sheets)")]
    SheetIndexOutOfRange { index: usize, count: usize },

    #[error("Output file must end with .csv or .json: {}", .0.display())]
    UnsupportedOutput(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
