//! Serialized artifact writers (spec.md §6 "Serialized artifacts"). Each
//! function renders one in-memory stage result into the stable text format
//! the IDE writes to disk — the direct analog of `faxc-drv`'s `emit_output`,
//! minus the IR/object-file branches this language's pipeline has no use for.

use triac_ir::Quadruple;
use triac_lex::Token;
use triac_par::AstNode;
use triac_util::{Diagnostic, SymbolTable};

fn lines(items: impl Iterator<Item = String>) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&item);
        out.push('\n');
    }
    out
}

/// `tokens.txt` — one token per line, `Token`'s own `Display` impl.
pub fn tokens_txt(tokens: &[Token]) -> String {
    lines(tokens.iter().map(|t| t.to_string()))
}

/// `errores.txt` — lexical errors, same per-line format as `tokens.txt`.
pub fn lexical_errors_txt(errors: &[Token]) -> String {
    lines(errors.iter().map(|t| t.to_string()))
}

/// `ast.txt` — indented tree dump, two spaces per depth level (`AstNode::dump`).
pub fn ast_txt(ast: Option<&AstNode>) -> String {
    ast.map(AstNode::dump).unwrap_or_default()
}

/// `errores_sintacticos.txt` — one parser diagnostic per line.
pub fn syntax_errors_txt(diagnostics: &[Diagnostic]) -> String {
    lines(diagnostics.iter().map(|d| d.to_string()))
}

/// `errores_semanticos.txt` — one diagnostic per line.
pub fn semantic_errors_txt(diagnostics: &[Diagnostic]) -> String {
    lines(diagnostics.iter().map(|d| d.to_string()))
}

/// `tabla_simbolos.txt` — fixed-width `SCOPE LVL NAME TYPE OFFSET COUNT LINES`
/// columns (spec.md §6). `LVL` is the scope path's nesting depth (`global` is
/// 1); `OFFSET` has no original-source counterpart — the source language
/// never models a memory layout — so it's the symbol's 0-based position in
/// declaration order, which is the only stable "slot" notion available here
/// (recorded as an Open Question resolution in DESIGN.md). `LINES` lists
/// every use-site line, comma-separated, declaration first.
pub fn symbol_table_txt(table: &SymbolTable) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<20} {:>3} {:<16} {:<8} {:>6} {:>5} {}\n",
        "SCOPE", "LVL", "NAME", "TYPE", "OFFSET", "COUNT", "LINES"
    ));
    for (offset, sym) in table.list_symbols().enumerate() {
        let lvl = sym.scope_path.matches('.').count() + 1;
        let lines_str = sym
            .uses
            .iter()
            .map(|p| p.line.to_string())
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&format!(
            "{:<20} {:>3} {:<16} {:<8} {:>6} {:>5} {}\n",
            sym.scope_path,
            lvl,
            sym.name,
            sym.ty,
            offset,
            sym.uses.len(),
            lines_str
        ));
    }
    out
}

/// The flat quadruple listing. Not one of spec.md §6's named artifacts, but
/// `Quadruple`'s own `Display` gives a stable one-per-line form an IDE's
/// "Compile" output pane can reuse directly.
pub fn quads_txt(quads: &[Quadruple]) -> String {
    lines(quads.iter().map(|q| q.to_string()))
}
