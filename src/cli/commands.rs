use crate::error::PeekResult;
use crate::excel::load_sheet;
use crate::preview::{render_summary, render_table};
use crate::resolver::{expand_home, resolve};
use crate::types::SheetSelector;
use crate::writer::export_table;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::info;

/// Directory searched when no `--path` is given
pub const DEFAULT_PATH: &str = "~/reservation";

/// Inputs for one preview run
#[derive(Debug, Clone)]
pub struct PreviewArgs {
    /// Workbook file, or directory to pick the newest workbook from
    pub path: PathBuf,
    /// Sheet selector exactly as typed (index digits or a sheet name)
    pub sheet: String,
    /// Number of leading rows to show
    pub rows: NonZeroUsize,
    /// Optional export target (.csv or .json)
    pub output: Option<PathBuf>,
}

impl Default for PreviewArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            sheet: "0".to_string(),
            rows: NonZeroUsize::new(20).unwrap_or(NonZeroUsize::MIN),
            output: None,
        }
    }
}

/// Execute the preview pipeline, writing to stdout
pub fn run(args: PreviewArgs) -> PeekResult<()> {
    let stdout = io::stdout();
    run_with(args, &mut stdout.lock())
}

/// Resolve, load, print, then optionally export. Stops at the first failure.
pub fn run_with<W: Write>(args: PreviewArgs, out: &mut W) -> PeekResult<()> {
    let resolved = resolve(&expand_home(&args.path))?;
    let selector = SheetSelector::parse(&args.sheet);
    info!(file = %resolved.path().display(), sheet = %selector, "loading sheet");

    let table = load_sheet(resolved.path(), &selector)?;

    write!(out, "{}", render_summary(resolved.path(), &args.sheet, &table))?;
    writeln!(out)?;
    write!(out, "{}", render_table(&table, args.rows.get()))?;

    if let Some(output) = args.output {
        let output = expand_home(&output);
        export_table(&table, &output)?;
        writeln!(out)?;
        writeln!(out, "Saved: {}", output.display())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PeekError;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_default_args() {
        let args = PreviewArgs::default();
        assert_eq!(args.path, PathBuf::from("~/reservation"));
        assert_eq!(args.sheet, "0");
        assert_eq!(args.rows.get(), 20);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_run_with_stops_on_resolution_error() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();

        let mut out = Vec::new();
        let err = run_with(
            PreviewArgs {
                path: dir.path().to_path_buf(),
                ..PreviewArgs::default()
            },
            &mut out,
        )
        .unwrap_err();

        assert!(matches!(err, PeekError::NoSpreadsheets(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_with_corrupt_workbook_prints_nothing() {
        let dir = TempDir::new().unwrap();
        let book = dir.path().join("broken.xlsx");
        std::fs::write(&book, b"not a workbook").unwrap();

        let mut out = Vec::new();
        let err = run_with(
            PreviewArgs {
                path: book,
                ..PreviewArgs::default()
            },
            &mut out,
        )
        .unwrap_err();

        assert!(matches!(err, PeekError::Workbook(_)));
        assert!(out.is_empty());
    }
}
