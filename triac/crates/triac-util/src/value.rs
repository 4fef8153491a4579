//! Scalar values shared by the semantic analyzer and the interpreter.

use std::fmt;

/// The inferred/declared type of an expression or symbol.
///
/// `Unknown` is distinct from `Error`: `Unknown` means "not yet computed"
/// (the default before a node is visited), `Error` means "computation
/// failed and the failure must propagate" (spec.md §4.3's "errors are
/// sticky" rule).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    Int,
    Float,
    Bool,
    Error,
    Unknown,
}

impl DataType {
    pub fn is_numeric(self) -> bool {
        matches!(self, DataType::Int | DataType::Float)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::Bool => "bool",
            DataType::Error => "error",
            DataType::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// A constant-folded value, or the sentinel recorded when folding hits an
/// error (division by a constant zero, a type mismatch, an undeclared
/// operand).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConstValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Error,
}

impl ConstValue {
    pub fn data_type(&self) -> DataType {
        match self {
            ConstValue::Int(_) => DataType::Int,
            ConstValue::Float(_) => DataType::Float,
            ConstValue::Bool(_) => DataType::Bool,
            ConstValue::Error => DataType::Error,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConstValue::Int(i) => Some(*i as f64),
            ConstValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Int(i) => write!(f, "{i}"),
            ConstValue::Float(x) => write!(f, "{x}"),
            ConstValue::Bool(b) => write!(f, "{}", if *b { 1 } else { 0 }),
            ConstValue::Error => write!(f, "error"),
        }
    }
}
