//! `program`, `decl_list`, `var_decl`, `ident_list` — spec.md §4.2 productions
//! for `main { ... }` and variable declarations.

use crate::ast::{AstNode, NodeKind};
use crate::parser::{Parser, SYNC_DECL};

/// `program := 'main' '{' decl_list '}'`
pub(crate) fn program(p: &mut Parser) -> Option<AstNode> {
    let mut programa = AstNode::new(NodeKind::Programa);

    if p.expect("main").is_none() {
        p.synchronize(&["{"]);
    }
    if p.expect("{").is_none() {
        p.synchronize(&["int", "float", "bool"]);
    }

    let mut main = AstNode::new(NodeKind::Main);
    decl_list(p, &mut main);

    p.expect("}");

    programa.push_child(main);
    Some(programa)
}

/// `decl_list := { var_decl } stmt_list` — flattened directly into `main`'s
/// children rather than wrapped in an intermediate container (the teacher's
/// `bloque` fallback only existed to paper over a single-vs-many-children
/// split that this node doesn't need).
fn decl_list(p: &mut Parser, main: &mut AstNode) {
    while p.check("int") || p.check("float") || p.check("bool") {
        match var_decl(p) {
            Some(decl) => main.push_child(decl),
            None => p.synchronize(SYNC_DECL),
        }
    }

    let mut lista = AstNode::new(NodeKind::ListaSentencias);
    crate::stmt::stmt_list(p, &mut lista);
    main.push_child(lista);
}

/// `var_decl := type ident_list ';'`
fn var_decl(p: &mut Parser) -> Option<AstNode> {
    let Some(type_tok) = (if p.check("int") || p.check("float") || p.check("bool") {
        p.advance()
    } else {
        None
    }) else {
        return None;
    };

    let mut node = AstNode::new(NodeKind::DeclaracionVariable).at(type_tok.pos);
    node.push_child(AstNode::leaf(NodeKind::Tipo, type_tok.lexeme.clone()).at(type_tok.pos));

    if let Some(ids) = ident_list(p) {
        node.push_child(ids);
    }

    if p.expect(";").is_none() {
        p.synchronize(SYNC_DECL);
    }

    Some(node)
}

/// `ident_list := IDENT { ',' IDENT }`
fn ident_list(p: &mut Parser) -> Option<AstNode> {
    let first = p.expect_identifier()?;
    let mut node = AstNode::new(NodeKind::Identificador).at(first.pos);
    node.push_child(AstNode::leaf(NodeKind::Id, first.lexeme.clone()).at(first.pos));

    while p.eat(",").is_some() {
        match p.expect_identifier() {
            Some(id) => node.push_child(AstNode::leaf(NodeKind::Id, id.lexeme.clone()).at(id.pos)),
            None => break,
        }
    }

    Some(node)
}
