//! triac-drv - Driver: the facade the rest of the world calls.
//!
//! ============================================================================
//! DRIVER OVERVIEW
//! ============================================================================
//!
//! Wires the five independent pipeline stages (spec.md §6 external
//! interfaces #1-5) behind one crate, and owns the stable text artifact
//! formats an embedding IDE writes to disk. Nothing here re-implements a
//! stage; it only orchestrates and (de)serializes.
//!
//! ```text
//! source ──lex──▶ tokens ──parse──▶ ast ──analyze──▶ annotated + symbols
//!                                    │
//!                                    └──generate──▶ quads ──execute──▶ report
//! ```
//!
//! There is deliberately no `Session`/`Config` type carrying emit flags,
//! target triples, or incremental-cache bookkeeping the way `faxc-drv`'s
//! does — spec.md §6 is explicit that the CLI/UI surface is not part of
//! the core, and every stage here is a pure function over its predecessor's
//! output, so there is no session state to own between calls.

mod artifacts;
mod pipeline;
mod token_reader;

pub use artifacts::{
    ast_txt, lexical_errors_txt, quads_txt, semantic_errors_txt, symbol_table_txt,
    syntax_errors_txt, tokens_txt,
};
pub use pipeline::{
    analyze, execute, execute_traced, generate, lex, parse, run_pipeline, CompileOutcome,
};
pub use token_reader::read_tokens;
pub use triac_vm::Snapshot;

#[cfg(test)]
mod edge_cases;
