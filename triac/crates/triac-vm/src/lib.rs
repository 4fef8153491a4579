//! triac-vm - Quadruple interpreter.
//!
//! ============================================================================
//! INTERPRETER OVERVIEW
//! ============================================================================
//!
//! Executes the flat quadruple list `triac-ir` produces against a memory
//! map keyed by variable/temporary name (spec.md §4.5). A label table is
//! built once at load time; execution is a plain fetch-dispatch-advance
//! loop bounded by a step cap, since the source language has no function
//! calls or recursion to otherwise bound runtime.

mod error;
mod interp;
mod value;

pub use error::RuntimeFault;
pub use interp::{ExecutionReport, Interpreter, Snapshot, StepOutcome};
pub use value::Value;

use triac_ir::Quadruple;

/// Matches `interprete.py::ejecutar`'s default.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// `execute(quads, inputs, max_steps) -> {output, memory, steps, completed}`
/// — spec.md §6 external interface #5.
pub fn execute(
    quads: &[Quadruple],
    inputs: Vec<String>,
    max_steps: usize,
) -> Result<ExecutionReport, RuntimeFault> {
    let mut interp = Interpreter::new(quads, inputs);
    let mut steps = 0usize;

    loop {
        if steps >= max_steps {
            return Err(RuntimeFault::Runaway { max_steps });
        }
        let outcome = interp.step()?;
        steps += 1;
        if outcome == StepOutcome::Halted {
            break;
        }
    }

    Ok(interp.into_report(steps))
}

#[cfg(test)]
mod edge_cases;
