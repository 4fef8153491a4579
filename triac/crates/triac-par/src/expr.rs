//! Expression grammar: `expr`, `rel_expr`, `simple_expr`, `term`, `factor`,
//! `component` (spec.md §4.2), in ascending precedence order.

use crate::ast::{AstNode, NodeKind};
use crate::parser::Parser;
use triac_lex::TokenKind;

/// `expr := rel_expr { log_op rel_expr }`
pub(crate) fn expr(p: &mut Parser) -> Option<AstNode> {
    let mut left = rel_expr(p)?;

    while p.check_kind(TokenKind::LogOp) {
        let op_tok = p.advance().expect("checked above");
        let op = op_tok.lexeme.clone();

        let Some(right) = rel_expr(p) else {
            p.report_unexpected("operando derecho del operador lógico");
            return Some(left);
        };

        left = AstNode::new(NodeKind::LogOp)
            .with_value(op)
            .with_child(left)
            .with_child(right);
    }

    Some(left)
}

/// `rel_expr := simple_expr [ rel_op simple_expr ]` — at most one relational
/// operator per expression, matching the closed grammar exactly.
fn rel_expr(p: &mut Parser) -> Option<AstNode> {
    let left = simple_expr(p)?;

    if p.check_kind(TokenKind::RelOp) {
        let op_tok = p.advance().expect("checked above");
        let op = op_tok.lexeme.clone();

        let Some(right) = simple_expr(p) else {
            p.report_unexpected("operando derecho del operador relacional");
            return Some(left);
        };

        return Some(
            AstNode::new(NodeKind::RelOp)
                .with_value(op)
                .with_child(left)
                .with_child(right),
        );
    }

    Some(left)
}

/// `simple_expr := term { ('+' | '-') term }`, left-associative.
fn simple_expr(p: &mut Parser) -> Option<AstNode> {
    let mut left = term(p)?;

    while p.check("+") || p.check("-") {
        let op_tok = p.advance().expect("checked above");
        let op = op_tok.lexeme.clone();

        let Some(right) = term(p) else {
            p.report_unexpected("término tras el operador de suma");
            return Some(left);
        };

        left = AstNode::new(NodeKind::SumaOp)
            .with_value(op)
            .with_child(left)
            .with_child(right);
    }

    Some(left)
}

/// `term := factor { ('*' | '/' | '%') factor }`, left-associative.
fn term(p: &mut Parser) -> Option<AstNode> {
    let mut left = factor(p)?;

    while p.check("*") || p.check("/") || p.check("%") {
        let op_tok = p.advance().expect("checked above");
        let op = op_tok.lexeme.clone();

        let Some(right) = factor(p) else {
            p.report_unexpected("factor tras el operador de multiplicación");
            return Some(left);
        };

        left = AstNode::new(NodeKind::MultOp)
            .with_value(op)
            .with_child(left)
            .with_child(right);
    }

    Some(left)
}

/// `factor := component [ '^' factor ]`, right-associative — the original
/// draft's loop actually folds `^` left-to-right despite its own comment
/// claiming the opposite; this follows the mathematically intended reading
/// instead (see DESIGN.md).
fn factor(p: &mut Parser) -> Option<AstNode> {
    let left = component(p)?;

    if p.eat("^").is_some() {
        let Some(right) = factor(p) else {
            p.report_unexpected("componente tras el operador '^'");
            return Some(left);
        };

        return Some(
            AstNode::new(NodeKind::PotOp)
                .with_value("^")
                .with_child(left)
                .with_child(right),
        );
    }

    Some(left)
}

/// `component := '(' expr ')' | NUMBER | STRING | bool | IDENT
///             | ('+'|'-') component | '!' component`
fn component(p: &mut Parser) -> Option<AstNode> {
    if p.at_end() {
        p.report_unexpected("se esperaba una expresión");
        return None;
    }

    if p.check("+") || p.check("-") {
        let sign_tok = p.advance().expect("checked above");
        let mut node = AstNode::new(NodeKind::Unario)
            .with_value(sign_tok.lexeme.clone())
            .at(sign_tok.pos);
        if let Some(inner) = component(p) {
            node.push_child(inner);
        }
        return Some(node);
    }

    if p.check("!") {
        let op_tok = p.advance().expect("checked above");
        let mut node = AstNode::new(NodeKind::ComponenteLogico).at(op_tok.pos);
        node.push_child(AstNode::leaf(NodeKind::OpLogico, "!").at(op_tok.pos));
        if let Some(inner) = component(p) {
            node.push_child(inner);
        }
        return Some(node);
    }

    if p.eat("(").is_some() {
        let inner = expr(p);
        if p.expect(")").is_none() {
            p.synchronize(&[";"]);
        }
        return inner;
    }

    if p.check_kind(TokenKind::IntLiteral) || p.check_kind(TokenKind::RealLiteral) {
        let tok = p.advance().expect("checked above");
        return Some(AstNode::leaf(NodeKind::Numero, tok.lexeme.clone()).at(tok.pos));
    }

    if p.check_kind(TokenKind::StringLiteral) {
        let tok = p.advance().expect("checked above");
        return Some(AstNode::leaf(NodeKind::Cadena, tok.lexeme.clone()).at(tok.pos));
    }

    if p.check_kind(TokenKind::Identifier) {
        let tok = p.advance().expect("checked above");
        let kind = if tok.lexeme == "true" || tok.lexeme == "false" {
            NodeKind::Bool
        } else {
            NodeKind::Id
        };
        return Some(AstNode::leaf(kind, tok.lexeme.clone()).at(tok.pos));
    }

    p.report_unexpected("número, identificador o '(' expresión ')'");
    None
}
