//! Type rules (spec.md §4.3 "Type rules").

use triac_util::DataType;

/// Parses a `numero` node's lexeme into its constant and type, the way
/// `infer_type_from_literal`/`int()`/`float()` do in the original analyzer.
pub fn parse_numeric_literal(lexeme: &str) -> Option<(DataType, f64, i64)> {
    if lexeme.contains('.') {
        lexeme.parse::<f64>().ok().map(|f| (DataType::Float, f, f as i64))
    } else {
        lexeme
            .parse::<i64>()
            .ok()
            .map(|i| (DataType::Int, i as f64, i))
    }
}

/// Can a value of `src` be assigned into a variable declared `dest`?
/// Returns `Err(message)` on mismatch. int -> float widens; everything
/// touching `bool` on the other side is rejected; float -> int is rejected.
pub fn check_assignment_compat(dest: DataType, src: DataType) -> Result<(), String> {
    if dest == src {
        return Ok(());
    }
    if dest == DataType::Float && src == DataType::Int {
        return Ok(());
    }
    if dest == DataType::Int && src == DataType::Float {
        return Err("no se puede asignar float a int".to_string());
    }
    if dest == DataType::Bool || src == DataType::Bool {
        let other = if dest == DataType::Bool { src } else { dest };
        return Err(format!("incompatibilidad de tipos: bool no es compatible con {other}"));
    }
    Err(format!("tipos incompatibles en asignación: {dest} vs {src}"))
}

/// Result type of a binary arithmetic operator given its operand types:
/// float if either side is float, else int. Caller has already rejected
/// bool operands.
pub fn arith_result_type(lhs: DataType, rhs: DataType) -> DataType {
    if lhs == DataType::Float || rhs == DataType::Float {
        DataType::Float
    } else {
        DataType::Int
    }
}
