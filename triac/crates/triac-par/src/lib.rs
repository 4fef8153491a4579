//! triac-par - Recursive-descent parser with panic-mode recovery.
//!
//! ============================================================================
//! PARSER OVERVIEW
//! ============================================================================
//!
//! An LL(1) parser, one token of lookahead, built by hand as a set of
//! mutually recursive functions — one per grammar nonterminal in spec.md
//! §4.2. On a mismatch the parser emits a `PARSE_EXPECT`/`PARSE_UNEXPECTED`
//! diagnostic and enters panic mode: it discards tokens until one of a
//! per-context synchronization set is found, then resumes at the same
//! nonterminal (spec.md §4.2 "Error recovery").
//!
//! Input is the token sequence with `Error`-kind tokens filtered out before
//! parsing starts — the lexer's own diagnostics are reported independently
//! and never reach the grammar.

mod ast;
mod decl;
mod expr;
mod parser;
mod stmt;

pub use ast::{kind_name, AstNode, NodeKind};
pub use parser::Parser;

use triac_lex::Token;
use triac_util::Diagnostic;

/// `parse(tokens) -> (ast, errors)` — spec.md §6 external interface #2.
pub fn parse(tokens: &[Token]) -> (Option<AstNode>, Vec<Diagnostic>) {
    let mut parser = Parser::new(tokens);
    let ast = parser.parse_program();
    (ast, parser.into_diagnostics())
}

#[cfg(test)]
mod edge_cases;
