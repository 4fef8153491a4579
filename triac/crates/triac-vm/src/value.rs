//! Runtime scalar values (spec.md §4.5 "Address resolution").
//!
//! Memory holds a variable's last-written value, which is always one of
//! these three shapes — booleans never appear here; `gt/lt/.../and/or/not`
//! already coerce to 0/1 integers during execution, matching
//! `interprete.py`'s `1 if resultado else 0`.

use std::fmt;
use triac_ir::Address;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Int(i) => *i as f64,
            Value::Float(f) => *f,
            Value::Str(s) => s.parse::<f64>().unwrap_or(0.0),
        }
    }

    /// `true` unless the value is the numeric zero — mirrors Python's
    /// truthiness for the int/float case, which is all `if_t`/`if_f` ever
    /// see in practice (their operand is always a `gt/lt/.../and/or/not`
    /// result, already 0 or 1).
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
        }
    }

    fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
            || matches!(self, Value::Str(s) if s.contains('.'))
    }

    /// Binary numeric op, widening to float if either operand is float —
    /// the same rule `arith_result_type` uses at compile time.
    fn numeric_op(
        &self,
        rhs: &Value,
        int_op: impl Fn(i64, i64) -> i64,
        float_op: impl Fn(f64, f64) -> f64,
    ) -> Value {
        if self.is_float() || rhs.is_float() {
            Value::Float(float_op(self.as_f64(), rhs.as_f64()))
        } else {
            Value::Int(int_op(self.as_int(), rhs.as_int()))
        }
    }

    fn as_int(&self) -> i64 {
        match self {
            Value::Int(i) => *i,
            Value::Float(f) => *f as i64,
            Value::Str(s) => s.parse::<i64>().unwrap_or(0),
        }
    }

    pub fn add(&self, rhs: &Value) -> Value {
        if let (Value::Str(a), Value::Str(b)) = (self, rhs) {
            return Value::Str(format!("{a}{b}"));
        }
        self.numeric_op(rhs, |a, b| a.wrapping_add(b), |a, b| a + b)
    }

    pub fn sub(&self, rhs: &Value) -> Value {
        self.numeric_op(rhs, |a, b| a.wrapping_sub(b), |a, b| a - b)
    }

    pub fn mul(&self, rhs: &Value) -> Value {
        self.numeric_op(rhs, |a, b| a.wrapping_mul(b), |a, b| a * b)
    }

    pub fn rem(&self, rhs: &Value) -> Value {
        self.numeric_op(rhs, |a, b| if b == 0 { 0 } else { a % b }, |a, b| a % b)
    }

    pub fn neg(&self) -> Value {
        match self {
            Value::Int(i) => Value::Int(-i),
            Value::Float(f) => Value::Float(-f),
            Value::Str(_) => Value::Int(-self.as_int()),
        }
    }

    pub fn cmp_f64(&self, rhs: &Value) -> std::cmp::Ordering {
        self.as_f64().partial_cmp(&rhs.as_f64()).unwrap_or(std::cmp::Ordering::Equal)
    }

    pub fn bool_value(b: bool) -> Value {
        Value::Int(if b { 1 } else { 0 })
    }

    /// Parses a `rd` input token the way `_ejecutar_read` does: float if it
    /// has a `.`, else int, else kept as the raw string.
    pub fn from_input_token(token: &str) -> Value {
        if let Ok(i) = token.parse::<i64>() {
            return Value::Int(i);
        }
        if let Ok(f) = token.parse::<f64>() {
            return Value::Float(f);
        }
        Value::Str(token.to_string())
    }

    /// The value a literal quadruple address resolves to directly, with no
    /// memory lookup.
    pub fn from_literal_address(addr: &Address) -> Option<Value> {
        match addr {
            Address::IntLit(i) => Some(Value::Int(*i)),
            Address::FloatLit(f) => Some(Value::Float(*f)),
            Address::StringLit(s) => Some(Value::Str(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}
