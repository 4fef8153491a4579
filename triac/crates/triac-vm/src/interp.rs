//! The interpreter loop (spec.md §4.5), grounded directly in
//! `interprete.py`'s `InterpreteCI`: a label table built once up front, then
//! a fetch-dispatch-advance loop over a flat quadruple list.

use std::collections::VecDeque;
use std::fmt;

use indexmap::IndexMap;
use triac_ir::{Address, Opcode, Quadruple};

use crate::error::RuntimeFault;
use crate::value::Value;

/// Everything a completed run hands back — spec.md §6 external interface
/// #5's `{output, memory, steps, completed}`. Only ever constructed on a
/// successful run (a [`RuntimeFault`] is returned instead of a report with
/// `completed: false`), so `completed` is always `true` here — matching
/// `interprete.py::ejecutar`, whose dict result is likewise only ever built
/// after the loop exits normally; the runaway case raises before reaching it.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutionReport {
    pub output: Vec<Value>,
    pub memory: IndexMap<String, Value>,
    pub steps: usize,
    pub completed: bool,
}

/// What happened after executing one quadruple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Halted,
}

/// A loaded, running program. Exposing this (rather than only the
/// all-at-once [`crate::execute`]) is the typed equivalent of
/// `ejecutar_paso` as a public operation (spec.md §5) — an embedding
/// environment can single-step for breakpoints or its own timeout policy.
pub struct Interpreter<'a> {
    quads: &'a [Quadruple],
    labels: std::collections::HashMap<u32, usize>,
    memory: IndexMap<String, Value>,
    pc: usize,
    output: Vec<Value>,
    inputs: VecDeque<String>,
}

impl<'a> Interpreter<'a> {
    pub fn new(quads: &'a [Quadruple], inputs: Vec<String>) -> Self {
        let mut labels = std::collections::HashMap::new();
        for (i, q) in quads.iter().enumerate() {
            if q.op == Opcode::Lab {
                if let Address::Label(n) = q.a1 {
                    // Duplicate label: last definition wins (spec.md §4.5).
                    labels.insert(n, i);
                }
            }
        }

        Self {
            quads,
            labels,
            memory: IndexMap::new(),
            pc: 0,
            output: Vec::new(),
            inputs: inputs.into(),
        }
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn memory(&self) -> &IndexMap<String, Value> {
        &self.memory
    }

    pub fn output(&self) -> &[Value] {
        &self.output
    }

    fn value_of(&mut self, addr: &Address) -> Value {
        if let Some(v) = Value::from_literal_address(addr) {
            return v;
        }
        match addr {
            Address::Name(n) => self.read_memory(n.clone()),
            Address::Temp(t) => self.read_memory(format!("t{t}")),
            Address::Label(_) | Address::None => Value::Int(0),
        }
    }

    fn read_memory(&mut self, key: String) -> Value {
        self.memory.entry(key).or_insert(Value::Int(0)).clone()
    }

    fn write_memory(&mut self, addr: &Address, value: Value) {
        let key = match addr {
            Address::Name(n) => n.clone(),
            Address::Temp(t) => format!("t{t}"),
            _ => return,
        };
        self.memory.insert(key, value);
    }

    fn jump_to(&mut self, addr: &Address) -> Result<(), RuntimeFault> {
        let Address::Label(n) = addr else {
            return Err(RuntimeFault::LabelNotFound { label: addr.to_string(), pc: self.pc });
        };
        match self.labels.get(n) {
            Some(&idx) => {
                self.pc = idx;
                Ok(())
            }
            None => Err(RuntimeFault::LabelNotFound { label: addr.to_string(), pc: self.pc }),
        }
    }

    /// Executes `qs[pc]` and advances. Returns [`StepOutcome::Halted`] once
    /// the program counter runs off the end of the list or `halt` fires.
    pub fn step(&mut self) -> Result<StepOutcome, RuntimeFault> {
        if self.pc >= self.quads.len() {
            return Ok(StepOutcome::Halted);
        }
        let quad = self.quads[self.pc].clone();

        match quad.op {
            Opcode::Asn => {
                let v = self.value_of(&quad.a1);
                self.write_memory(&quad.a2, v);
                self.pc += 1;
            }
            Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Mod => {
                let a = self.value_of(&quad.a1);
                let b = self.value_of(&quad.a2);
                let result = match quad.op {
                    Opcode::Add => a.add(&b),
                    Opcode::Sub => a.sub(&b),
                    Opcode::Mul => a.mul(&b),
                    Opcode::Mod => a.rem(&b),
                    _ => unreachable!(),
                };
                self.write_memory(&quad.a3, result);
                self.pc += 1;
            }
            Opcode::Div => {
                let a = self.value_of(&quad.a1);
                let b = self.value_of(&quad.a2);
                if b.as_f64() == 0.0 {
                    return Err(RuntimeFault::DivByZero { pc: self.pc });
                }
                // Matches `interprete.py`'s `val1 / val2`: always true
                // (float) division, regardless of operand types.
                self.write_memory(&quad.a3, Value::Float(a.as_f64() / b.as_f64()));
                self.pc += 1;
            }
            Opcode::Gt | Opcode::Lt | Opcode::Ge | Opcode::Le | Opcode::Eq | Opcode::Ne => {
                let a = self.value_of(&quad.a1);
                let b = self.value_of(&quad.a2);
                let ord = a.cmp_f64(&b);
                use std::cmp::Ordering::*;
                let result = match quad.op {
                    Opcode::Gt => ord == Greater,
                    Opcode::Lt => ord == Less,
                    Opcode::Ge => ord != Less,
                    Opcode::Le => ord != Greater,
                    Opcode::Eq => ord == Equal,
                    Opcode::Ne => ord != Equal,
                    _ => unreachable!(),
                };
                self.write_memory(&quad.a3, Value::bool_value(result));
                self.pc += 1;
            }
            Opcode::And | Opcode::Or => {
                let a = self.value_of(&quad.a1);
                let b = self.value_of(&quad.a2);
                let result = match quad.op {
                    Opcode::And => a.is_truthy() && b.is_truthy(),
                    Opcode::Or => a.is_truthy() || b.is_truthy(),
                    _ => unreachable!(),
                };
                self.write_memory(&quad.a3, Value::bool_value(result));
                self.pc += 1;
            }
            Opcode::Not => {
                let a = self.value_of(&quad.a1);
                self.write_memory(&quad.a3, Value::bool_value(!a.is_truthy()));
                self.pc += 1;
            }
            Opcode::Neg => {
                let a = self.value_of(&quad.a1);
                self.write_memory(&quad.a3, a.neg());
                self.pc += 1;
            }
            Opcode::IfT => {
                let cond = self.value_of(&quad.a1);
                if cond.is_truthy() {
                    self.jump_to(&quad.a2)?;
                } else {
                    self.pc += 1;
                }
            }
            Opcode::IfF => {
                let cond = self.value_of(&quad.a1);
                if !cond.is_truthy() {
                    self.jump_to(&quad.a2)?;
                } else {
                    self.pc += 1;
                }
            }
            Opcode::Goto => {
                self.jump_to(&quad.a1)?;
            }
            Opcode::Lab => {
                self.pc += 1;
            }
            Opcode::Rd => {
                let token = self.inputs.pop_front().unwrap_or_else(|| "0".to_string());
                let value = Value::from_input_token(&token);
                self.write_memory(&quad.a1, value);
                self.pc += 1;
            }
            Opcode::Wri => {
                let value = self.value_of(&quad.a1);
                self.output.push(value);
                self.pc += 1;
            }
            Opcode::Halt => {
                return Ok(StepOutcome::Halted);
            }
        }

        if self.pc >= self.quads.len() {
            Ok(StepOutcome::Halted)
        } else {
            Ok(StepOutcome::Continue)
        }
    }

    pub fn into_report(self, steps: usize) -> ExecutionReport {
        ExecutionReport {
            output: self.output,
            memory: self.memory,
            steps,
            completed: true,
        }
    }

    /// A debug snapshot of the interpreter's current state, grounded in
    /// `interprete.py::imprimir_estado`: PC, memory, output so far, and the
    /// instruction about to run.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pc: self.pc,
            memory: self.memory.clone(),
            output: self.output.clone(),
            next_instruction: self.quads.get(self.pc).cloned(),
        }
    }
}

/// See [`Interpreter::snapshot`].
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub pc: usize,
    pub memory: IndexMap<String, Value>,
    pub output: Vec<Value>,
    pub next_instruction: Option<Quadruple>,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PC: {}", self.pc)?;
        write!(f, "Memoria: {{")?;
        for (i, (k, v)) in self.memory.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        writeln!(f, "}}")?;
        write!(f, "Salida: [")?;
        for (i, v) in self.output.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        writeln!(f, "]")?;
        match &self.next_instruction {
            Some(q) => write!(f, "Próxima instrucción: {q}"),
            None => write!(f, "Próxima instrucción: (fin)"),
        }
    }
}
