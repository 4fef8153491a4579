//! triat - command-line driver for the triac teaching-language pipeline.
//!
//! Mirrors the five numbered stages of spec.md §6's external interface as
//! one `run` subcommand with a `--stage` cutoff, so a caller can stop at
//! tokens, the AST, the annotated AST, the quadruples, or a full execution.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_pipeline_command, RunArgs, Stage};
use config::Config;
use error::{Result, TriatError};

/// triat - drive the triac compiler pipeline from the command line.
#[derive(Parser, Debug)]
#[command(name = "triat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lex, parse, analyze, compile and run triac programs", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true, env = "TRIAT_VERBOSE")]
    verbose: bool,

    /// Path to a triat.toml config file (defaults to ./triat.toml if present).
    #[arg(short, long, global = true, env = "TRIAT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the pipeline on a source file, stopping at the given stage.
    Run(RunCommand),
}

#[derive(Parser, Debug)]
struct RunCommand {
    /// Path to the source program.
    input: PathBuf,

    /// Directory artifacts are written to (default: from config, then `.`).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// How far to run the pipeline: lex, parse, analyze, compile, execute.
    #[arg(short, long, default_value = "execute")]
    stage: String,

    /// Values consumed by `cin >>`, in order.
    #[arg(long = "input-value")]
    inputs: Vec<String>,

    /// Interpreter step cap for the execute stage.
    #[arg(long)]
    max_steps: Option<usize>,

    /// Print an interpreter snapshot to stderr after every step.
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run(args) => execute_run(args, config),
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| TriatError::Config(format!("failed to initialize logging: {e}")))?;

    Ok(())
}

fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_run(args: RunCommand, config: Config) -> Result<()> {
    let stage = Stage::parse(&args.stage)
        .ok_or_else(|| TriatError::Config(format!("unknown stage: {}", args.stage)))?;

    let output_dir = args
        .output
        .unwrap_or_else(|| PathBuf::from(config.output_dir.clone()));
    let max_steps = args.max_steps.unwrap_or(config.max_steps);

    let result = run_pipeline_command(RunArgs {
        input: args.input,
        output_dir,
        stage,
        inputs: args.inputs,
        max_steps,
        trace: args.trace,
    })?;

    tracing::info!(
        tokens = result.data.tokens,
        quads = result.data.quads,
        "pipeline finished"
    );
    if let Some(output) = &result.data.execution_output {
        for line in output {
            println!("{line}");
        }
    }

    Ok(())
}
