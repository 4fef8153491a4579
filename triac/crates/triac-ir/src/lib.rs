//! triac-ir - Three-address-code (quadruple) generator.
//!
//! ============================================================================
//! IR GENERATOR OVERVIEW
//! ============================================================================
//!
//! Walks the AST bottom-up (spec.md §4.4): every expression node returns an
//! [`Address`] — a variable, a temporary, or a literal — and every statement
//! node emits zero or more quadruples. Temporary and label counters are
//! fresh per call to [`generate`], so the same source always produces the
//! same IR (spec.md §8's determinism invariant).
//!
//! The normative opcode set and control-flow lowering templates are fixed
//! by spec.md §4.4 and intentionally narrower than the source repository's
//! several competing codegen drafts — see `quad.rs` and `gen.rs` for the
//! mapping from legacy spellings to the sanctioned mnemonics.

mod gen;
mod quad;

pub use quad::{Address, Opcode, Quadruple};

use gen::Generator;
use triac_par::AstNode;

/// `generate(ast) -> [quadruple]` — spec.md §6 external interface #4.
///
/// Accepts either the raw or the annotated AST; since both share the same
/// `(kind, value, children)` shape at the `triac_par::AstNode` level, this
/// walks the raw tree directly and leaves any semantic annotation to the
/// caller.
pub fn generate(ast: Option<&AstNode>) -> Vec<Quadruple> {
    let Some(root) = ast else {
        return Vec::new();
    };
    let mut gen = Generator::new();
    gen.visit(root);
    gen.into_code()
}

#[cfg(test)]
mod edge_cases;
