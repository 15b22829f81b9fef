use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use sheetpeek::cli::{self, PreviewArgs, DEFAULT_PATH};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sheetpeek")]
#[command(about = "Read an Excel file and print a preview.")]
#[command(long_about = "Read an Excel file and print a preview.

Given a directory, the most recently modified .xlsx/.xls/.xlsm file in it is
used. The selected sheet is loaded with its first row as column names.

EXAMPLES:
  sheetpeek                                   # newest workbook in ~/reservation
  sheetpeek --path bookings.xlsx --sheet Summary
  sheetpeek --path ~/exports --rows 5 --output latest.json")]
#[command(version)]
struct Cli {
    /// Excel file path or directory containing Excel files
    #[arg(long, default_value = DEFAULT_PATH)]
    path: PathBuf,

    /// Sheet name or index (default: 0 for first sheet)
    #[arg(long, default_value = "0")]
    sheet: String,

    /// Number of rows to print from the top
    #[arg(long, default_value = "20")]
    rows: NonZeroUsize,

    /// Optional output file (.csv or .json)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log resolution and export steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("sheetpeek={}", level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let path = cli.path.clone();
    cli::run(PreviewArgs {
        path: cli.path,
        sheet: cli.sheet,
        rows: cli.rows,
        output: cli.output,
    })
    .with_context(|| format!("Failed to preview {}", path.display()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
