//! The single-pass tree walk: `anotar_nodo`/`evaluar_expresion` from the
//! original analyzer, restructured as one exhaustive match per closed
//! [`NodeKind`] instead of an if/elif chain with a generic fallback.
//!
//! Declarations only ever occur in `decl_list`, before any statement, so
//! (like the original) this walk never calls `enter_scope`/`exit_scope` —
//! the teaching language has no nested declaration scopes to push.

use crate::annotated::AnnotatedNode;
use crate::types::{arith_result_type, check_assignment_compat, parse_numeric_literal};
use triac_par::{AstNode, NodeKind};
use triac_util::{ConstValue, DataType, Diagnostic, DiagnosticCategory, SymbolTable};

pub struct Analyzer {
    table: SymbolTable,
    diagnostics: Vec<Diagnostic>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            table: SymbolTable::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn into_parts(self) -> (SymbolTable, Vec<Diagnostic>) {
        (self.table, self.diagnostics)
    }

    fn error(&mut self, category: DiagnosticCategory, message: impl Into<String>, pos: triac_util::Pos) {
        self.diagnostics.push(Diagnostic::new(category, message, pos));
    }

    /// Entry point: anotar_nodo(programa).
    pub fn annotate(&mut self, node: &AstNode) -> AnnotatedNode {
        match node.kind {
            NodeKind::Programa | NodeKind::Main | NodeKind::ListaSentencias | NodeKind::BloqueIf
            | NodeKind::BloqueElse | NodeKind::BloqueWhile | NodeKind::BloqueDo => {
                self.annotate_block(node)
            }
            NodeKind::DeclaracionVariable => self.annotate_decl(node),
            NodeKind::Asignacion => self.annotate_assignment(node),
            NodeKind::Seleccion => self.annotate_selection(node),
            NodeKind::Iteracion => self.annotate_iteration(node),
            NodeKind::Repeticion => self.annotate_repetition(node),
            NodeKind::SentIn => self.annotate_sent_in(node),
            NodeKind::SentOut => self.annotate_sent_out(node),
            // Every other kind only appears inside an expression; a bare
            // occurrence at statement level still gets evaluated so the
            // walk never silently drops a node.
            _ => self.evaluate(node),
        }
    }

    fn annotate_block(&mut self, node: &AstNode) -> AnnotatedNode {
        let mut out = AnnotatedNode::new(node.kind, node.value.clone(), node.pos.unwrap_or_default());
        for child in &node.children {
            out.push_child(self.annotate(child));
        }
        out
    }

    fn annotate_decl(&mut self, node: &AstNode) -> AnnotatedNode {
        let mut out = AnnotatedNode::new(node.kind, node.value.clone(), node.pos.unwrap_or_default());

        let ty = node
            .children
            .iter()
            .find(|c| c.kind == NodeKind::Tipo)
            .and_then(|c| c.value.as_deref())
            .map(parse_type_name)
            .unwrap_or(DataType::Unknown);

        if let Some(tipo_node) = node.children.iter().find(|c| c.kind == NodeKind::Tipo) {
            let mut tipo_anotado =
                AnnotatedNode::new(NodeKind::Tipo, tipo_node.value.clone(), tipo_node.pos.unwrap_or_default());
            tipo_anotado.data_type = ty;
            out.push_child(tipo_anotado);
        }

        for ident_list in node.children.iter().filter(|c| c.kind == NodeKind::Identificador) {
            for id in ident_list.children.iter().filter(|c| c.kind == NodeKind::Id) {
                let name = id.value.clone().unwrap_or_default();
                let pos = id.pos.unwrap_or_default();
                if let Err(dup) = self.table.declare(&name, ty, pos) {
                    self.error(
                        DiagnosticCategory::DupDecl,
                        format!("variable '{}' ya declarada en el ámbito {}", dup.name, dup.scope_path),
                        pos,
                    );
                }
                let mut id_anotado = AnnotatedNode::new(NodeKind::Id, Some(name), pos);
                id_anotado.data_type = ty;
                out.push_child(id_anotado);
            }
        }

        out.data_type = ty;
        out
    }

    fn annotate_assignment(&mut self, node: &AstNode) -> AnnotatedNode {
        let name = node.value.clone().unwrap_or_default();
        let pos = node.pos.unwrap_or_default();
        let mut out = AnnotatedNode::new(node.kind, node.value.clone(), pos);

        let declared_ty = match self.table.lookup(&name, pos) {
            Some(sym) => sym.ty,
            None => {
                self.error(
                    DiagnosticCategory::Undeclared,
                    format!("variable '{name}' no declarada"),
                    pos,
                );
                out.data_type = DataType::Error;
                return out;
            }
        };

        let Some(rhs) = node.children.first() else {
            out.data_type = declared_ty;
            return out;
        };

        let rhs_anotado = self.evaluate(rhs);

        if rhs_anotado.is_error() {
            out.push_child(rhs_anotado);
            out.data_type = declared_ty;
            return out;
        }

        if let Err(message) = check_assignment_compat(declared_ty, rhs_anotado.data_type) {
            self.error(DiagnosticCategory::TypeIncompat, message, pos);
            out.push_child(rhs_anotado);
            out.data_type = declared_ty;
            return out;
        }

        if let Some(value) = rhs_anotado.computed_value {
            self.table.set_value(&name, value);
        }
        out.data_type = declared_ty;
        out.computed_value = rhs_anotado.computed_value;
        out.push_child(rhs_anotado);
        out
    }

    fn annotate_selection(&mut self, node: &AstNode) -> AnnotatedNode {
        let mut out = AnnotatedNode::new(node.kind, node.value.clone(), node.pos.unwrap_or_default());
        for (i, child) in node.children.iter().enumerate() {
            let annotated = if i == 0 && child.kind == NodeKind::Condicion {
                self.annotate_condicion(child)
            } else {
                self.annotate(child)
            };
            out.push_child(annotated);
        }
        out
    }

    fn annotate_iteration(&mut self, node: &AstNode) -> AnnotatedNode {
        self.annotate_selection(node)
    }

    fn annotate_repetition(&mut self, node: &AstNode) -> AnnotatedNode {
        let mut out = AnnotatedNode::new(node.kind, node.value.clone(), node.pos.unwrap_or_default());
        for child in &node.children {
            let annotated = if child.kind == NodeKind::Condicion {
                self.annotate_condicion(child)
            } else {
                self.annotate(child)
            };
            out.push_child(annotated);
        }
        out
    }

    fn annotate_condicion(&mut self, node: &AstNode) -> AnnotatedNode {
        let mut out = AnnotatedNode::new(node.kind, node.value.clone(), node.pos.unwrap_or_default());
        if let Some(expr) = node.children.first() {
            out.push_child(self.evaluate(expr));
        }
        out
    }

    fn annotate_sent_in(&mut self, node: &AstNode) -> AnnotatedNode {
        let mut out = AnnotatedNode::new(node.kind, node.value.clone(), node.pos.unwrap_or_default());
        for id in node.children.iter().filter(|c| c.kind == NodeKind::Id) {
            let name = id.value.clone().unwrap_or_default();
            let pos = id.pos.or(node.pos).unwrap_or_default();
            let ty = match self.table.lookup(&name, pos) {
                Some(sym) => sym.ty,
                None => {
                    self.error(
                        DiagnosticCategory::Undeclared,
                        format!("variable '{name}' no declarada"),
                        pos,
                    );
                    DataType::Error
                }
            };
            let mut id_anotado = AnnotatedNode::new(NodeKind::Id, Some(name), pos);
            id_anotado.data_type = ty;
            out.push_child(id_anotado);
        }
        out
    }

    fn annotate_sent_out(&mut self, node: &AstNode) -> AnnotatedNode {
        let mut out = AnnotatedNode::new(node.kind, node.value.clone(), node.pos.unwrap_or_default());
        for child in &node.children {
            out.push_child(self.evaluate(child));
        }
        out
    }

    /// evaluar_expresion: computes `data_type` and, when foldable,
    /// `computed_value` for an expression subtree.
    fn evaluate(&mut self, node: &AstNode) -> AnnotatedNode {
        let pos = node.pos.unwrap_or_default();
        let mut out = AnnotatedNode::new(node.kind, node.value.clone(), pos);

        match node.kind {
            NodeKind::Numero => {
                let lexeme = node.value.as_deref().unwrap_or("");
                match parse_numeric_literal(lexeme) {
                    Some((ty, as_f, as_i)) => {
                        out.data_type = ty;
                        out.computed_value = Some(if ty == DataType::Float {
                            ConstValue::Float(as_f)
                        } else {
                            ConstValue::Int(as_i)
                        });
                    }
                    None => out.data_type = DataType::Error,
                }
            }
            NodeKind::Bool => {
                let truth = node.value.as_deref() == Some("true");
                out.data_type = DataType::Bool;
                out.computed_value = Some(ConstValue::Bool(truth));
            }
            NodeKind::Cadena => {
                out.data_type = DataType::Unknown;
            }
            NodeKind::Id => {
                let name = node.value.clone().unwrap_or_default();
                match self.table.lookup(&name, pos) {
                    Some(sym) => {
                        out.data_type = sym.ty;
                        out.computed_value = sym.value;
                    }
                    None => {
                        self.error(
                            DiagnosticCategory::Undeclared,
                            format!("variable '{name}' no declarada"),
                            pos,
                        );
                        out.data_type = DataType::Error;
                    }
                }
            }
            NodeKind::SumaOp | NodeKind::MultOp | NodeKind::PotOp => {
                self.evaluate_arith(node, &mut out);
            }
            NodeKind::RelOp => {
                self.evaluate_rel(node, &mut out);
            }
            NodeKind::LogOp => {
                self.evaluate_log(node, &mut out);
            }
            NodeKind::ComponenteLogico => {
                self.evaluate_not(node, &mut out);
            }
            NodeKind::Unario => {
                self.evaluate_unary(node, &mut out);
            }
            NodeKind::ExpresionVacia => {
                out.data_type = DataType::Unknown;
            }
            NodeKind::Salida => {
                // `cout << a << b` carries one or two segments; the node's
                // own type/value mirror the last one, the way a compound
                // expression node propagates from its last child.
                for segment in &node.children {
                    let annotated = self.evaluate(segment);
                    out.data_type = annotated.data_type;
                    out.computed_value = annotated.computed_value;
                    out.push_child(annotated);
                }
            }
            _ => {
                // Any other shape only ever wraps a single evaluable child
                // (the parser never nests raw statement nodes here).
                if let Some(child) = node.children.first() {
                    return self.evaluate(child);
                }
                out.data_type = DataType::Error;
            }
        }

        out
    }

    fn evaluate_arith(&mut self, node: &AstNode, out: &mut AnnotatedNode) {
        let Some(lhs_raw) = node.children.first() else {
            out.data_type = DataType::Error;
            return;
        };
        let Some(rhs_raw) = node.children.get(1) else {
            out.data_type = DataType::Error;
            return;
        };

        let lhs = self.evaluate(lhs_raw);
        let rhs = self.evaluate(rhs_raw);
        let pos = node.pos.unwrap_or_default();

        if lhs.is_error() || rhs.is_error() {
            out.data_type = DataType::Error;
            out.push_child(lhs);
            out.push_child(rhs);
            return;
        }

        if lhs.data_type == DataType::Bool || rhs.data_type == DataType::Bool {
            self.error(
                DiagnosticCategory::TypeIncompat,
                "operador aritmético no puede usarse con bool",
                pos,
            );
            out.data_type = DataType::Error;
            out.push_child(lhs);
            out.push_child(rhs);
            return;
        }

        let result_ty = arith_result_type(lhs.data_type, rhs.data_type);
        out.data_type = result_ty;

        if let (Some(l), Some(r)) = (lhs.computed_value.and_then(|v| v.as_f64()), rhs.computed_value.and_then(|v| v.as_f64())) {
            let op = node.value.as_deref().unwrap_or("");
            let folded = match op {
                "+" => Some(l + r),
                "-" => Some(l - r),
                "*" => Some(l * r),
                "/" => {
                    if r == 0.0 {
                        self.error(DiagnosticCategory::DivByZero, "división por cero", pos);
                        None
                    } else {
                        Some(l / r)
                    }
                }
                "%" => Some(l % r),
                "^" => Some(l.powf(r)),
                _ => None,
            };
            out.computed_value = folded.map(|v| {
                if result_ty == DataType::Float {
                    ConstValue::Float(v)
                } else {
                    ConstValue::Int(v as i64)
                }
            });
        }

        out.push_child(lhs);
        out.push_child(rhs);
    }

    fn evaluate_rel(&mut self, node: &AstNode, out: &mut AnnotatedNode) {
        out.data_type = DataType::Bool;
        let Some(lhs_raw) = node.children.first() else { return };
        let Some(rhs_raw) = node.children.get(1) else { return };

        let lhs = self.evaluate(lhs_raw);
        let rhs = self.evaluate(rhs_raw);

        if let (Some(l), Some(r)) = (lhs.computed_value.and_then(|v| v.as_f64()), rhs.computed_value.and_then(|v| v.as_f64())) {
            let op = node.value.as_deref().unwrap_or("");
            let result = match op {
                "<" => Some(l < r),
                ">" => Some(l > r),
                "<=" => Some(l <= r),
                ">=" => Some(l >= r),
                "==" => Some(l == r),
                "!=" => Some(l != r),
                _ => None,
            };
            out.computed_value = result.map(ConstValue::Bool);
        }

        out.push_child(lhs);
        out.push_child(rhs);
    }

    fn evaluate_log(&mut self, node: &AstNode, out: &mut AnnotatedNode) {
        out.data_type = DataType::Bool;
        let Some(lhs_raw) = node.children.first() else { return };
        let Some(rhs_raw) = node.children.get(1) else { return };

        let lhs = self.evaluate(lhs_raw);
        let rhs = self.evaluate(rhs_raw);
        let pos = node.pos.unwrap_or_default();

        if lhs.data_type != DataType::Bool || rhs.data_type != DataType::Bool {
            self.error(
                DiagnosticCategory::TypeIncompat,
                "operación lógica requiere operandos booleanos",
                pos,
            );
            out.push_child(lhs);
            out.push_child(rhs);
            return;
        }

        if let (Some(ConstValue::Bool(l)), Some(ConstValue::Bool(r))) = (lhs.computed_value, rhs.computed_value) {
            let op = node.value.as_deref().unwrap_or("");
            out.computed_value = match op {
                "&&" => Some(ConstValue::Bool(l && r)),
                "||" => Some(ConstValue::Bool(l || r)),
                _ => None,
            };
        }

        out.push_child(lhs);
        out.push_child(rhs);
    }

    fn evaluate_not(&mut self, node: &AstNode, out: &mut AnnotatedNode) {
        out.data_type = DataType::Bool;
        let Some(inner_raw) = node.children.iter().find(|c| c.kind != NodeKind::OpLogico) else {
            return;
        };
        let inner = self.evaluate(inner_raw);
        let pos = node.pos.unwrap_or_default();

        if inner.data_type != DataType::Bool {
            self.error(
                DiagnosticCategory::TypeIncompat,
                "el operador '!' requiere un operando booleano",
                pos,
            );
            out.push_child(inner);
            return;
        }

        if let Some(ConstValue::Bool(b)) = inner.computed_value {
            out.computed_value = Some(ConstValue::Bool(!b));
        }
        out.push_child(inner);
    }

    fn evaluate_unary(&mut self, node: &AstNode, out: &mut AnnotatedNode) {
        let Some(inner_raw) = node.children.first() else {
            out.data_type = DataType::Error;
            return;
        };
        let inner = self.evaluate(inner_raw);
        let pos = node.pos.unwrap_or_default();

        if inner.is_error() {
            out.data_type = DataType::Error;
            out.push_child(inner);
            return;
        }
        if !inner.data_type.is_numeric() {
            self.error(
                DiagnosticCategory::TypeIncompat,
                "el signo unario requiere un operando numérico",
                pos,
            );
            out.data_type = DataType::Error;
            out.push_child(inner);
            return;
        }

        out.data_type = inner.data_type;
        if let Some(v) = inner.computed_value.and_then(|v| v.as_f64()) {
            let negated = if node.value.as_deref() == Some("-") { -v } else { v };
            out.computed_value = Some(if inner.data_type == DataType::Float {
                ConstValue::Float(negated)
            } else {
                ConstValue::Int(negated as i64)
            });
        }
        out.push_child(inner);
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_type_name(name: &str) -> DataType {
    match name {
        "int" => DataType::Int,
        "float" => DataType::Float,
        "bool" => DataType::Bool,
        _ => DataType::Unknown,
    }
}
