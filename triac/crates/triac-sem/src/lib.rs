//! triac-sem - Semantic analyzer and type checker.
//!
//! ============================================================================
//! SEMANTIC ANALYSIS OVERVIEW
//! ============================================================================
//!
//! A single pass over the AST in source order (spec.md §4.3). For each node
//! it resolves identifiers against the symbol table, checks the assignment
//! and operator type rules, and constant-folds arithmetic/relational/logical
//! subtrees when both operands are already known. Every diagnostic is
//! recoverable: a failing subtree is annotated `error` and its siblings keep
//! being analyzed (spec.md §7 "errors are values").

mod analysis;
mod annotated;
mod types;

pub use annotated::AnnotatedNode;

use analysis::Analyzer;
use triac_par::AstNode;
use triac_util::{Diagnostic, DiagnosticCategory, SymbolTable};

/// `analyze(ast) -> (annotated_ast, symbol_table, errors)` — spec.md §6
/// external interface #3.
pub fn analyze(ast: Option<&AstNode>) -> (Option<AnnotatedNode>, SymbolTable, Vec<Diagnostic>) {
    let mut analyzer = Analyzer::new();

    let Some(root) = ast else {
        let diag = Diagnostic::fatal(
            DiagnosticCategory::AstInvalid,
            "el AST está vacío",
            triac_util::Pos::default(),
        );
        let (table, _) = analyzer.into_parts();
        return (None, table, vec![diag]);
    };

    let annotated = analyzer.annotate(root);
    let (table, diagnostics) = analyzer.into_parts();
    (Some(annotated), table, diagnostics)
}

#[cfg(test)]
mod edge_cases;
