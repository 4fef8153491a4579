//! The five-function programmatic API (spec.md §6 "Programmatic API the
//! IDE consumes"). Each stage is independently invokable — the IDE's menu
//! entries (Lex, Parse, Analyze, Compile, Execute) each call exactly one of
//! these — so they're kept as plain functions rather than bundled behind a
//! stateful session, unlike `faxc-drv`'s `Session::compile`, which owns an
//! entire multi-file, multi-phase build and has to track emitted artifacts
//! across MIR/LIR/codegen. `run_pipeline` below is the convenience chain a
//! caller reaches for when it wants all of the compile-time stages at once.

use triac_ir::Quadruple;
use triac_lex::{LexOutput, Token};
use triac_par::AstNode;
use triac_sem::AnnotatedNode;
use triac_util::{Diagnostic, SymbolTable};
use triac_vm::{ExecutionReport, Interpreter, RuntimeFault, Snapshot, StepOutcome};

/// `lex(source) -> (tokens, errors)` — spec.md §6 external interface #1.
pub fn lex(source: &str) -> LexOutput {
    tracing::debug!(len = source.len(), "lexing source");
    triac_lex::lex(source)
}

/// `parse(tokens) -> (ast, errors)` — spec.md §6 external interface #2.
pub fn parse(tokens: &[Token]) -> (Option<AstNode>, Vec<Diagnostic>) {
    tracing::debug!(token_count = tokens.len(), "parsing tokens");
    triac_par::parse(tokens)
}

/// `analyze(ast) -> (annotated_ast, symbol_table, errors)` — spec.md §6
/// external interface #3.
pub fn analyze(ast: Option<&AstNode>) -> (Option<AnnotatedNode>, SymbolTable, Vec<Diagnostic>) {
    tracing::debug!(has_ast = ast.is_some(), "running semantic analysis");
    triac_sem::analyze(ast)
}

/// `generate(ast) -> [quadruple]` — spec.md §6 external interface #4.
///
/// Takes the plain AST rather than the annotated one: codegen (grounded in
/// `generador_codigo_intermedio.py`) never consults `tipo_dato`/`valor`, only
/// node shape, so the cheaper input is accepted directly.
pub fn generate(ast: Option<&AstNode>) -> Vec<Quadruple> {
    tracing::debug!(has_ast = ast.is_some(), "generating quadruples");
    triac_ir::generate(ast)
}

/// `execute(quads, inputs, max_steps) -> {output, memory, steps, completed}`
/// — spec.md §6 external interface #5.
pub fn execute(
    quads: &[Quadruple],
    inputs: Vec<String>,
    max_steps: usize,
) -> Result<ExecutionReport, RuntimeFault> {
    tracing::debug!(quad_count = quads.len(), max_steps, "executing quadruples");
    triac_vm::execute(quads, inputs, max_steps)
}

/// Single-steps the same loop `execute` runs, handing a [`Snapshot`] to
/// `on_step` after every quadruple — the public surface for `ejecutar_paso`
/// (spec.md §5), used by `triat run --trace`.
pub fn execute_traced(
    quads: &[Quadruple],
    inputs: Vec<String>,
    max_steps: usize,
    mut on_step: impl FnMut(&Snapshot),
) -> Result<ExecutionReport, RuntimeFault> {
    tracing::debug!(quad_count = quads.len(), max_steps, "executing quadruples (traced)");
    let mut interp = Interpreter::new(quads, inputs);
    let mut steps = 0usize;

    loop {
        if steps >= max_steps {
            return Err(RuntimeFault::Runaway { max_steps });
        }
        let outcome = interp.step()?;
        steps += 1;
        on_step(&interp.snapshot());
        if outcome == StepOutcome::Halted {
            break;
        }
    }

    Ok(interp.into_report(steps))
}

/// Output of chaining `lex` through `generate` over one source string.
#[derive(Debug, Clone)]
pub struct CompileOutcome {
    pub lex: LexOutput,
    pub ast: Option<AstNode>,
    pub parse_errors: Vec<Diagnostic>,
    pub annotated: Option<AnnotatedNode>,
    pub symbols: SymbolTable,
    pub semantic_errors: Vec<Diagnostic>,
    pub quads: Vec<Quadruple>,
}

/// Runs lex, parse, analyze and generate back to back — the "Compile" menu
/// entry's worth of work (spec.md §6's IDE surface). Stops threading the AST
/// forward if a stage returns `None`, but still runs every later stage so
/// every artifact file always has *something* to write, matching codegen's
/// own "continue on recoverable errors" policy (spec.md §7).
pub fn run_pipeline(source: &str) -> CompileOutcome {
    let lex_out = lex(source);
    let (ast, parse_errors) = parse(&lex_out.tokens);
    let (annotated, symbols, semantic_errors) = analyze(ast.as_ref());
    let quads = generate(ast.as_ref());

    CompileOutcome {
        lex: lex_out,
        ast,
        parse_errors,
        annotated,
        symbols,
        semantic_errors,
        quads,
    }
}
