//! Bottom-up code generation (spec.md §4.4), grounded directly in the
//! source generator's `_recorrer` dispatcher: expression nodes return an
//! [`Address`] and statement nodes return nothing, emitting quadruples as
//! a side effect onto `self.code`.

use crate::quad::{Address, Opcode, Quadruple};
use triac_par::{AstNode, NodeKind};

pub struct Generator {
    temp_count: u32,
    label_count: u32,
    code: Vec<Quadruple>,
}

impl Generator {
    pub fn new() -> Self {
        Self {
            temp_count: 0,
            label_count: 0,
            code: Vec::new(),
        }
    }

    fn new_temp(&mut self) -> Address {
        self.temp_count += 1;
        Address::Temp(self.temp_count)
    }

    fn new_label(&mut self) -> Address {
        self.label_count += 1;
        Address::Label(self.label_count)
    }

    fn emit(&mut self, op: Opcode, a1: Address, a2: Address, a3: Address) {
        self.code.push(Quadruple::new(op, a1, a2, a3));
    }

    pub fn into_code(self) -> Vec<Quadruple> {
        self.code
    }

    /// Walks `node`, returning the address an enclosing expression should
    /// use for its value; statement nodes always return [`Address::None`].
    pub fn visit(&mut self, node: &AstNode) -> Address {
        match node.kind {
            NodeKind::Programa => node
                .children
                .first()
                .map(|main| self.visit(main))
                .unwrap_or(Address::None),

            NodeKind::Main | NodeKind::ListaSentencias | NodeKind::Bloque
            | NodeKind::BloqueIf | NodeKind::BloqueElse | NodeKind::BloqueWhile
            | NodeKind::BloqueDo => {
                for child in &node.children {
                    self.visit(child);
                }
                Address::None
            }

            NodeKind::DeclaracionVariable => Address::None,

            NodeKind::Asignacion => self.gen_assignment(node),
            NodeKind::SumaOp | NodeKind::MultOp => self.gen_binary_arith(node),
            NodeKind::RelOp => self.gen_relational(node),
            NodeKind::LogOp => self.gen_logical(node),
            NodeKind::ComponenteLogico => self.gen_not(node),
            NodeKind::Unario => self.gen_unary(node),

            // `^` has no opcode in the normative set (spec.md §4.4); the
            // source's own generator never implements `pot_op` either, only
            // its semantic analyzer does. Skipped silently, per §4.4's
            // "unreachable or malformed subtrees".
            NodeKind::PotOp => Address::None,

            NodeKind::Numero => literal_address(node.value.as_deref().unwrap_or("0")),
            NodeKind::Cadena => Address::StringLit(strip_quotes(node.value.as_deref().unwrap_or(""))),
            NodeKind::Bool => Address::IntLit(if node.value.as_deref() == Some("true") { 1 } else { 0 }),
            NodeKind::Id => Address::Name(node.value.clone().unwrap_or_default()),

            NodeKind::Seleccion => self.gen_if_else(node),
            NodeKind::Iteracion => self.gen_while(node),
            NodeKind::Repeticion => self.gen_do_loop(node),
            NodeKind::SentIn => self.gen_read(node),
            NodeKind::SentOut => self.gen_write(node),

            NodeKind::Condicion => node
                .children
                .first()
                .map(|cond| self.visit(cond))
                .unwrap_or(Address::None),

            NodeKind::ExpresionVacia => Address::None,

            // Anything else only ever wraps a single evaluable child.
            _ => node
                .children
                .first()
                .map(|child| self.visit(child))
                .unwrap_or(Address::None),
        }
    }

    fn gen_assignment(&mut self, node: &AstNode) -> Address {
        let target = node.value.clone().unwrap_or_default();
        let Some(rhs) = node.children.first() else {
            return Address::None;
        };
        let value = self.visit(rhs);
        self.emit(Opcode::Asn, value, Address::Name(target.clone()), Address::None);
        Address::Name(target)
    }

    fn gen_binary_arith(&mut self, node: &AstNode) -> Address {
        let (Some(lhs), Some(rhs)) = (node.children.first(), node.children.get(1)) else {
            return Address::None;
        };
        let left = self.visit(lhs);
        let right = self.visit(rhs);
        let op = match node.value.as_deref() {
            Some("+") => Opcode::Add,
            Some("-") => Opcode::Sub,
            Some("*") => Opcode::Mul,
            Some("/") => Opcode::Div,
            Some("%") => Opcode::Mod,
            _ => return Address::None,
        };
        let result = self.new_temp();
        self.emit(op, left, right, result.clone());
        result
    }

    fn gen_relational(&mut self, node: &AstNode) -> Address {
        let (Some(lhs), Some(rhs)) = (node.children.first(), node.children.get(1)) else {
            return Address::None;
        };
        let Some(op) = node.value.as_deref().and_then(Opcode::from_rel_lexeme) else {
            return Address::None;
        };
        let left = self.visit(lhs);
        let right = self.visit(rhs);
        let result = self.new_temp();
        self.emit(op, left, right, result.clone());
        result
    }

    fn gen_logical(&mut self, node: &AstNode) -> Address {
        let (Some(lhs), Some(rhs)) = (node.children.first(), node.children.get(1)) else {
            return Address::None;
        };
        let op = match node.value.as_deref() {
            Some("&&") => Opcode::And,
            Some("||") => Opcode::Or,
            _ => return Address::None,
        };
        let left = self.visit(lhs);
        let right = self.visit(rhs);
        let result = self.new_temp();
        self.emit(op, left, right, result.clone());
        result
    }

    fn gen_not(&mut self, node: &AstNode) -> Address {
        // children: [op_logico leaf, operand]
        let Some(operand) = node.children.get(1) else {
            return Address::None;
        };
        let value = self.visit(operand);
        let result = self.new_temp();
        self.emit(Opcode::Not, value, Address::None, result.clone());
        result
    }

    fn gen_unary(&mut self, node: &AstNode) -> Address {
        let Some(operand) = node.children.first() else {
            return Address::None;
        };
        let value = self.visit(operand);
        if node.value.as_deref() == Some("+") {
            return value;
        }
        let result = self.new_temp();
        self.emit(Opcode::Neg, value, Address::None, result.clone());
        result
    }

    /// `if cond then A else B end` — spec.md §4.4 control-flow template.
    fn gen_if_else(&mut self, node: &AstNode) -> Address {
        let Some(cond) = node.children.first() else {
            return Address::None;
        };
        let bloque_if = node.children.get(1);
        let bloque_else = node.children.get(2);

        let t_cond = self.visit(cond);
        let l_else = self.new_label();
        let l_end = self.new_label();

        self.emit(Opcode::IfF, t_cond, l_else.clone(), Address::None);
        if let Some(b) = bloque_if {
            self.visit(b);
        }
        self.emit(Opcode::Goto, l_end.clone(), Address::None, Address::None);
        self.emit(Opcode::Lab, l_else, Address::None, Address::None);
        if let Some(b) = bloque_else {
            self.visit(b);
        }
        self.emit(Opcode::Lab, l_end, Address::None, Address::None);
        Address::None
    }

    /// `while cond … end`.
    fn gen_while(&mut self, node: &AstNode) -> Address {
        let Some(cond) = node.children.first() else {
            return Address::None;
        };
        let body = node.children.get(1);

        let l_top = self.new_label();
        let l_end = self.new_label();

        self.emit(Opcode::Lab, l_top.clone(), Address::None, Address::None);
        let t_cond = self.visit(cond);
        self.emit(Opcode::IfF, t_cond, l_end.clone(), Address::None);
        if let Some(b) = body {
            self.visit(b);
        }
        self.emit(Opcode::Goto, l_top, Address::None, Address::None);
        self.emit(Opcode::Lab, l_end, Address::None, Address::None);
        Address::None
    }

    /// `do … until cond` / `do … while cond`; the loop-kind lives on the
    /// `condicion` node's `value` (`"while"` or `"until"`). The trailing
    /// `lab Lend` is never a jump target (the language has no `break`) but
    /// spec.md §4.4's template emits it for both loop kinds, so we do too.
    fn gen_do_loop(&mut self, node: &AstNode) -> Address {
        let Some(body) = node.children.first() else {
            return Address::None;
        };
        let condicion = node.children.get(1);

        let l_top = self.new_label();
        self.emit(Opcode::Lab, l_top.clone(), Address::None, Address::None);
        self.visit(body);

        let Some(condicion) = condicion else {
            return Address::None;
        };
        let t_cond = condicion
            .children
            .first()
            .map(|c| self.visit(c))
            .unwrap_or(Address::None);

        if condicion.value.as_deref() == Some("while") {
            self.emit(Opcode::IfT, t_cond, l_top, Address::None);
        } else {
            self.emit(Opcode::IfF, t_cond, l_top, Address::None);
        }
        let l_end = self.new_label();
        self.emit(Opcode::Lab, l_end, Address::None, Address::None);
        Address::None
    }

    fn gen_read(&mut self, node: &AstNode) -> Address {
        let Some(id) = node.children.first() else {
            return Address::None;
        };
        let name = id.value.clone().unwrap_or_default();
        self.emit(Opcode::Rd, Address::Name(name), Address::None, Address::None);
        Address::None
    }

    /// `cout << a << b` lowers each segment to its own `wri` in source order.
    fn gen_write(&mut self, node: &AstNode) -> Address {
        let Some(salida) = node.children.first() else {
            return Address::None;
        };
        for segment in &salida.children {
            let value = self.visit(segment);
            self.emit(Opcode::Wri, value, Address::None, Address::None);
        }
        Address::None
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// A `numero` leaf's lexeme, parsed once into its literal address form.
fn literal_address(lexeme: &str) -> Address {
    if lexeme.contains('.') {
        lexeme.parse::<f64>().map(Address::FloatLit).unwrap_or(Address::IntLit(0))
    } else {
        lexeme.parse::<i64>().map(Address::IntLit).unwrap_or(Address::IntLit(0))
    }
}

/// A `cadena` leaf's lexeme keeps its surrounding quotes (spec.md §3); strip
/// them once here since [`Address::StringLit`]'s `Display` adds its own.
fn strip_quotes(lexeme: &str) -> String {
    lexeme
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(lexeme)
        .to_string()
}
