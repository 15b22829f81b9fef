//! Spreadsheet file resolution
//!
//! Turns a user-supplied path into the concrete workbook to read: an explicit
//! file is checked against the Excel allow-list, a directory yields its most
//! recently modified Excel file.

use crate::error::{PeekError, PeekResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// Extensions accepted as Excel workbooks (compared case-insensitively)
pub const EXCEL_SUFFIXES: [&str; 3] = ["xlsx", "xls", "xlsm"];

/// A workbook file that exists and carries an allowed extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    path: PathBuf,
}

impl ResolvedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Check whether a path carries one of the allowed Excel extensions
pub fn has_excel_suffix(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            EXCEL_SUFFIXES
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// Resolve `path` to a single workbook.
///
/// Directories are scanned non-recursively. When several candidates share the
/// newest modification time, the one whose file name sorts first wins.
pub fn resolve(path: &Path) -> PeekResult<ResolvedFile> {
    if path.is_file() {
        if !has_excel_suffix(path) {
            return Err(PeekError::UnsupportedFileType(path.to_path_buf()));
        }
        debug!(file = %path.display(), "using explicit workbook");
        return Ok(ResolvedFile {
            path: path.to_path_buf(),
        });
    }

    if !path.is_dir() {
        return Err(PeekError::PathNotFound(path.to_path_buf()));
    }

    let mut candidates: Vec<(PathBuf, SystemTime)> = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let candidate = entry.path();
        if !candidate.is_file() || !has_excel_suffix(&candidate) {
            continue;
        }
        // Follow symlinks so a linked workbook is ranked by its target's mtime
        match fs::metadata(&candidate).and_then(|m| m.modified()) {
            Ok(modified) => candidates.push((candidate, modified)),
            Err(e) => debug!(file = %candidate.display(), error = %e, "skipping unreadable entry"),
        }
    }

    // Stable order so equal timestamps always resolve the same way
    candidates.sort_by(|a, b| a.0.file_name().cmp(&b.0.file_name()));

    let newest = candidates
        .into_iter()
        .reduce(|best, next| if next.1 > best.1 { next } else { best })
        .ok_or_else(|| PeekError::NoSpreadsheets(path.to_path_buf()))?;

    debug!(
        dir = %path.display(),
        file = %newest.0.display(),
        "picked most recently modified workbook"
    );
    Ok(ResolvedFile { path: newest.0 })
}

/// Expand a leading `~` to the user's home directory
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}
