//! Cross-cutting parser scenarios: recovery, associativity, desugaring.

use crate::{parse, NodeKind};
use triac_lex::lex;

fn parse_src(src: &str) -> (Option<crate::AstNode>, Vec<triac_util::Diagnostic>) {
    let out = lex(src);
    parse(&out.tokens)
}

#[test]
fn well_formed_program_has_no_diagnostics() {
    let (ast, diags) = parse_src("main { int a; a = 1; cout << a; }");
    assert!(ast.is_some());
    assert!(diags.is_empty(), "unexpected diagnostics: {diags:?}");
}

#[test]
fn missing_semicolon_recovers_and_keeps_parsing() {
    let (ast, diags) = parse_src("main { int a; a = 1 cout << a; }");
    assert!(ast.is_some());
    assert!(!diags.is_empty());
    // recovery must still find the cout statement
    let main = &ast.unwrap().children[0];
    let stmts = main.children.last().unwrap();
    assert!(stmts
        .children
        .iter()
        .any(|n| n.kind == NodeKind::SentOut));
}

#[test]
fn exponent_is_right_associative() {
    // 2 ^ 3 ^ 2  ==  2 ^ (3 ^ 2)
    let (ast, _) = parse_src("main { int a; a = 2 ^ 3 ^ 2; }");
    let main = &ast.unwrap().children[0];
    let stmts = &main.children.last().unwrap().children;
    let asign = stmts.iter().find(|n| n.kind == NodeKind::Asignacion).unwrap();
    let top = &asign.children[0];
    assert_eq!(top.kind, NodeKind::PotOp);
    assert_eq!(top.children[0].value.as_deref(), Some("2"));
    assert_eq!(top.children[1].kind, NodeKind::PotOp);
}

#[test]
fn increment_desugars_to_assignment() {
    let (ast, diags) = parse_src("main { int a; a++; }");
    assert!(diags.is_empty());
    let main = &ast.unwrap().children[0];
    let stmts = &main.children.last().unwrap().children;
    let asign = stmts.iter().find(|n| n.kind == NodeKind::Asignacion).unwrap();
    assert_eq!(asign.value.as_deref(), Some("a"));
    let rhs = &asign.children[0];
    assert_eq!(rhs.kind, NodeKind::SumaOp);
    assert_eq!(rhs.value.as_deref(), Some("+"));
}

#[test]
fn do_until_condicion_carries_loop_kind() {
    let (ast, _) = parse_src("main { int a; do a++; until a > 10; }");
    let main = &ast.unwrap().children[0];
    let stmts = &main.children.last().unwrap().children;
    let rep = stmts.iter().find(|n| n.kind == NodeKind::Repeticion).unwrap();
    let cond = rep
        .children
        .iter()
        .find(|n| n.kind == NodeKind::Condicion)
        .unwrap();
    assert_eq!(cond.value.as_deref(), Some("until"));
}

#[test]
fn if_else_wraps_blocks_separately() {
    let (ast, diags) = parse_src("main { int a; if a > 0 then a = 1; else a = 2; end }");
    assert!(diags.is_empty());
    let main = &ast.unwrap().children[0];
    let stmts = &main.children.last().unwrap().children;
    let sel = stmts.iter().find(|n| n.kind == NodeKind::Seleccion).unwrap();
    assert!(sel.children.iter().any(|n| n.kind == NodeKind::BloqueIf));
    assert!(sel.children.iter().any(|n| n.kind == NodeKind::BloqueElse));
}

#[test]
fn string_literal_output_becomes_cadena_leaf() {
    let (ast, diags) = parse_src(r#"main { cout << "hola"; }"#);
    assert!(diags.is_empty());
    let main = &ast.unwrap().children[0];
    let stmts = &main.children.last().unwrap().children;
    let out = stmts.iter().find(|n| n.kind == NodeKind::SentOut).unwrap();
    let salida = &out.children[0];
    assert_eq!(salida.children[0].kind, NodeKind::Cadena);
}

#[test]
fn empty_tokens_reports_error_not_panic() {
    let (ast, diags) = parse(&[]);
    assert!(ast.is_some());
    assert!(!diags.is_empty());
}
