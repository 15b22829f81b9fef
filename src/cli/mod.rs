//! CLI command handlers

pub mod commands;

pub use commands::{run, run_with, PreviewArgs, DEFAULT_PATH};
