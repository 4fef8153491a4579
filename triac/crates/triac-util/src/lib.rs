//! triac-util - Shared data model for the triac pipeline.
//!
//! Every other `triac-*` crate builds on this one. It owns the three things
//! that cross every stage boundary: source positions (`pos`), diagnostics
//! (`diagnostic`), and the symbol table (`symbol`). Nothing in here knows
//! about tokens, the AST, or quadruples — those live one layer up, in
//! `triac-lex`, `triac-par`, `triac-sem` and `triac-ir` respectively.

pub mod diagnostic;
pub mod pos;
pub mod symbol;
pub mod value;

pub use diagnostic::{Diagnostic, DiagnosticCategory};
pub use pos::Pos;
pub use symbol::{Symbol, SymbolTable};
pub use value::{ConstValue, DataType};
