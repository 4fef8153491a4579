//! The AST.
//!
//! spec.md §4.2 fixes a *closed* set of node kinds that downstream stages
//! (`triac-sem`, `triac-ir`) rely on by exact spelling. Rather than one
//! Rust type per kind (spec.md §9's "Design Notes" alternative), this keeps
//! the teacher's generic tagged-node shape — `(kind, value, children, pos)`
//! — because the analyzer and generator both recurse over `children` the
//! same way the original `_recorrer`/`anotar_nodo` do: generically, keyed
//! off `kind`. [`NodeKind`] is still a closed Rust enum, so an unhandled
//! variant is a compile error in any `match`, not a silent no-op.

use triac_util::Pos;

/// The closed set of AST node kinds named in spec.md §4.2, verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Programa,
    Main,
    Bloque,
    DeclaracionVariable,
    Tipo,
    Identificador,
    Id,
    ListaSentencias,
    Asignacion,
    Seleccion,
    BloqueIf,
    BloqueElse,
    Condicion,
    Iteracion,
    BloqueWhile,
    Repeticion,
    BloqueDo,
    SentIn,
    SentOut,
    Salida,
    Cadena,
    ExpresionSimple,
    SumaOp,
    MultOp,
    PotOp,
    RelOp,
    LogOp,
    Numero,
    Bool,
    Unario,
    ComponenteLogico,
    OpLogico,
    ExpresionVacia,
}

/// A single AST node. Binary-operator children order is left-then-right;
/// an assignment node carries its target name as `value` and the RHS as
/// its sole child; a declaration node carries a `Tipo` child followed by an
/// `Identificador` child whose own children are `Id` leaves.
#[derive(Clone, Debug, PartialEq)]
pub struct AstNode {
    pub kind: NodeKind,
    pub value: Option<String>,
    pub children: Vec<AstNode>,
    pub pos: Option<Pos>,
}

impl AstNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            value: None,
            children: Vec::new(),
            pos: None,
        }
    }

    pub fn leaf(kind: NodeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            children: Vec::new(),
            pos: None,
        }
    }

    pub fn at(mut self, pos: Pos) -> Self {
        self.pos = Some(pos);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_child(mut self, child: AstNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = AstNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push_child(&mut self, child: AstNode) {
        self.children.push(child);
    }

    /// Two-space-per-depth indented dump — the `ast.txt` artifact format
    /// from spec.md §6.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(0, &mut out);
        out
    }

    fn dump_into(&self, depth: usize, out: &mut String) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(kind_name(self.kind));
        if let Some(v) = &self.value {
            out.push_str(": ");
            out.push_str(v);
        }
        out.push('\n');
        for child in &self.children {
            child.dump_into(depth + 1, out);
        }
    }
}

/// The exact spelling each node kind serializes as (spec.md §4.2's list).
pub const fn kind_name(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Programa => "programa",
        NodeKind::Main => "main",
        NodeKind::Bloque => "bloque",
        NodeKind::DeclaracionVariable => "declaracion_variable",
        NodeKind::Tipo => "tipo",
        NodeKind::Identificador => "identificador",
        NodeKind::Id => "id",
        NodeKind::ListaSentencias => "lista_sentencias",
        NodeKind::Asignacion => "asignacion",
        NodeKind::Seleccion => "seleccion",
        NodeKind::BloqueIf => "bloque_if",
        NodeKind::BloqueElse => "bloque_else",
        NodeKind::Condicion => "condicion",
        NodeKind::Iteracion => "iteracion",
        NodeKind::BloqueWhile => "bloque_while",
        NodeKind::Repeticion => "repeticion",
        NodeKind::BloqueDo => "bloque_do",
        NodeKind::SentIn => "sent_in",
        NodeKind::SentOut => "sent_out",
        NodeKind::Salida => "salida",
        NodeKind::Cadena => "cadena",
        NodeKind::ExpresionSimple => "expresion_simple",
        NodeKind::SumaOp => "suma_op",
        NodeKind::MultOp => "mult_op",
        NodeKind::PotOp => "pot_op",
        NodeKind::RelOp => "rel_op",
        NodeKind::LogOp => "log_op",
        NodeKind::Numero => "numero",
        NodeKind::Bool => "bool",
        NodeKind::Unario => "unario",
        NodeKind::ComponenteLogico => "componente_logico",
        NodeKind::OpLogico => "op_logico",
        NodeKind::ExpresionVacia => "expresion_vacia",
    }
}
