//! Runtime fault taxonomy (spec.md §7 "Runtime").
//!
//! Unlike the compile-time diagnostics the earlier stages return alongside
//! their output, a runtime fault aborts the run — spec.md §7:
//! "The interpreter's errors are fatal to the run; they abort and are
//! reported with the current PC and a message."

use thiserror::Error;
use triac_util::DiagnosticCategory;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeFault {
    #[error("división por cero (PC={pc})")]
    DivByZero { pc: usize },

    #[error("etiqueta no encontrada: {label} (PC={pc})")]
    LabelNotFound { label: String, pc: usize },

    #[error("límite de ejecución alcanzado ({max_steps} pasos). Posible loop infinito")]
    Runaway { max_steps: usize },

    /// [`triac_ir::Opcode`] is a closed enum, so this is unreachable from
    /// any `Vec<Quadruple>` this crate's own dispatcher was handed — it
    /// exists for parity with `DiagnosticCategory::UnknownOp` and a future
    /// loader that admits quadruples from untyped text.
    #[error("operación desconocida: {op} (PC={pc})")]
    UnknownOp { op: String, pc: usize },
}

impl RuntimeFault {
    pub fn category(&self) -> DiagnosticCategory {
        match self {
            RuntimeFault::DivByZero { .. } => DiagnosticCategory::DivByZeroRt,
            RuntimeFault::LabelNotFound { .. } => DiagnosticCategory::LabelNotFound,
            RuntimeFault::Runaway { .. } => DiagnosticCategory::Runaway,
            RuntimeFault::UnknownOp { .. } => DiagnosticCategory::UnknownOp,
        }
    }

    pub fn pc(&self) -> Option<usize> {
        match self {
            RuntimeFault::DivByZero { pc } => Some(*pc),
            RuntimeFault::LabelNotFound { pc, .. } => Some(*pc),
            RuntimeFault::UnknownOp { pc, .. } => Some(*pc),
            RuntimeFault::Runaway { .. } => None,
        }
    }
}
