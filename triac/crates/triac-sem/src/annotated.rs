//! The annotated tree `analyze` hands back alongside the symbol table: the
//! same shape as [`triac_par::AstNode`] plus a `data_type` and, when the
//! analyzer could fold it, a `computed_value` (spec.md §4.3).

use triac_par::NodeKind;
use triac_util::{ConstValue, DataType, Pos};

#[derive(Clone, Debug, PartialEq)]
pub struct AnnotatedNode {
    pub kind: NodeKind,
    pub value: Option<String>,
    pub children: Vec<AnnotatedNode>,
    pub pos: Pos,
    pub data_type: DataType,
    pub computed_value: Option<ConstValue>,
}

impl AnnotatedNode {
    pub fn new(kind: NodeKind, value: Option<String>, pos: Pos) -> Self {
        Self {
            kind,
            value,
            children: Vec::new(),
            pos,
            data_type: DataType::Unknown,
            computed_value: None,
        }
    }

    pub fn push_child(&mut self, child: AnnotatedNode) {
        self.children.push(child);
    }

    /// `true` once an operand (or this node itself) has failed analysis —
    /// spec.md §4.3 "errors are sticky".
    pub fn is_error(&self) -> bool {
        self.data_type == DataType::Error
    }
}
