//! The `run` command: drives `triac-drv`'s facade from a source file and
//! writes the artifacts spec.md §6 names, up to the requested stage.

use std::path::{Path, PathBuf};

use triac_drv::{
    ast_txt, lexical_errors_txt, quads_txt, run_pipeline, semantic_errors_txt, symbol_table_txt,
    syntax_errors_txt, tokens_txt,
};

use super::common::write_artifact;
use super::traits::{Command, CommandResult};
use crate::error::{Result, TriatError};

/// How far through the pipeline a `run` invocation goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lex,
    Parse,
    Analyze,
    Compile,
    Execute,
}

impl Stage {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "lex" => Some(Stage::Lex),
            "parse" => Some(Stage::Parse),
            "analyze" => Some(Stage::Analyze),
            "compile" => Some(Stage::Compile),
            "execute" => Some(Stage::Execute),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunArgs {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub stage: Stage,
    pub inputs: Vec<String>,
    pub max_steps: usize,
    /// Print an interpreter snapshot to stderr after every executed step
    /// (`interprete.py::imprimir_estado`, spec.md §5's `ejecutar_paso`).
    pub trace: bool,
}

/// Counts of what each stage produced, reported back to the terminal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub tokens: usize,
    pub lexical_errors: usize,
    pub syntax_errors: usize,
    pub semantic_errors: usize,
    pub quads: usize,
    pub execution_output: Option<Vec<String>>,
}

pub struct RunCommand {
    args: RunArgs,
}

impl Command for RunCommand {
    type Args = RunArgs;
    type Output = CommandResult<RunSummary>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let args = &self.args;
        let source = std::fs::read_to_string(&args.input)?;
        let outcome = run_pipeline(&source);
        let dir = args.output_dir.as_path();

        let mut summary = RunSummary {
            tokens: outcome.lex.tokens.len(),
            lexical_errors: outcome.lex.errors.len(),
            ..Default::default()
        };

        write_artifact(dir, "tokens.txt", &tokens_txt(&outcome.lex.tokens))?;
        write_artifact(dir, "errores.txt", &lexical_errors_txt(&outcome.lex.errors))?;

        if args.stage == Stage::Lex {
            let processed = summary.tokens;
            return Ok(CommandResult::success(summary).with_items_processed(processed));
        }

        summary.syntax_errors = outcome.parse_errors.len();
        write_artifact(dir, "ast.txt", &ast_txt(outcome.ast.as_ref()))?;
        write_artifact(
            dir,
            "errores_sintacticos.txt",
            &syntax_errors_txt(&outcome.parse_errors),
        )?;

        if args.stage == Stage::Parse {
            let processed = summary.tokens;
            return Ok(CommandResult::success(summary).with_items_processed(processed));
        }

        summary.semantic_errors = outcome.semantic_errors.len();
        write_artifact(dir, "tabla_simbolos.txt", &symbol_table_txt(&outcome.symbols))?;
        write_artifact(
            dir,
            "errores_semanticos.txt",
            &semantic_errors_txt(&outcome.semantic_errors),
        )?;

        if args.stage == Stage::Analyze {
            let processed = summary.tokens;
            return Ok(CommandResult::success(summary).with_items_processed(processed));
        }

        summary.quads = outcome.quads.len();
        write_artifact(dir, "quads.txt", &quads_txt(&outcome.quads))?;

        if args.stage == Stage::Compile {
            let processed = summary.quads;
            return Ok(CommandResult::success(summary).with_items_processed(processed));
        }

        if outcome.ast.is_none() {
            return Err(TriatError::EmptyProgram);
        }

        let report = if args.trace {
            triac_drv::execute_traced(&outcome.quads, args.inputs.clone(), args.max_steps, |snap| {
                eprintln!("{snap}\n");
            })
        } else {
            triac_drv::execute(&outcome.quads, args.inputs.clone(), args.max_steps)
        }
        .map_err(|fault| TriatError::Runtime(fault.to_string()))?;

        let output_lines: Vec<String> = report.output.iter().map(|v| v.to_string()).collect();
        write_artifact(dir, "resultado.txt", &output_lines.join("\n"))?;
        summary.execution_output = Some(output_lines);

        Ok(CommandResult::success(summary).with_items_processed(report.steps))
    }

    fn name() -> &'static str {
        "run"
    }
}

/// Convenience entry point mirroring `faxt::commands::build::run_build`.
pub fn run_pipeline_command(args: RunArgs) -> Result<CommandResult<RunSummary>> {
    validate(&args)?;
    RunCommand::new(args).execute()
}

fn validate(args: &RunArgs) -> Result<()> {
    if !args.input.is_file() {
        return Err(TriatError::Config(format!(
            "input path is not a file: {}",
            args.input.display()
        )));
    }
    Ok(())
}
