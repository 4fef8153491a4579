//! Subcommand implementations for the triat CLI.

pub mod common;
pub mod pipeline;
pub mod traits;

pub use pipeline::{run_pipeline_command, RunArgs, RunSummary, Stage};
