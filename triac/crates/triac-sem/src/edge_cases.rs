use crate::analyze;
use triac_lex::lex;
use triac_par::{parse, NodeKind};
use triac_util::{ConstValue, DataType};

fn analyze_src(src: &str) -> (Option<crate::AnnotatedNode>, triac_util::SymbolTable, Vec<triac_util::Diagnostic>) {
    let tokens = lex(src).tokens;
    let (ast, parse_errs) = parse(&tokens);
    assert!(parse_errs.is_empty(), "unexpected parse errors: {parse_errs:?}");
    analyze(ast.as_ref())
}

#[test]
fn empty_program_has_no_symbols_or_diagnostics() {
    let (_, table, diags) = analyze_src("main { }");
    assert!(table.is_empty());
    assert!(diags.is_empty());
}

#[test]
fn declares_and_resolves_variable() {
    let (_, table, diags) = analyze_src("main { int a; a = 5; }");
    assert!(diags.is_empty());
    let sym = table.peek("a").unwrap();
    assert_eq!(sym.ty, DataType::Int);
    assert_eq!(sym.value, Some(ConstValue::Int(5)));
}

#[test]
fn duplicate_declaration_is_reported() {
    let (_, _, diags) = analyze_src("main { int a; int a; }");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].category, triac_util::DiagnosticCategory::DupDecl);
}

#[test]
fn undeclared_variable_is_reported() {
    let (_, _, diags) = analyze_src("main { a = 1; }");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].category, triac_util::DiagnosticCategory::Undeclared);
}

#[test]
fn float_to_int_assignment_rejected() {
    let (_, _, diags) = analyze_src("main { int a; a = 1.5; }");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].category, triac_util::DiagnosticCategory::TypeIncompat);
}

#[test]
fn int_to_float_assignment_accepted() {
    let (_, table, diags) = analyze_src("main { float a; a = 3; }");
    assert!(diags.is_empty());
    assert_eq!(table.peek("a").unwrap().ty, DataType::Float);
}

#[test]
fn constant_division_by_zero_is_folded_and_reported() {
    let (_, _, diags) = analyze_src("main { int a; a = 1 / 0; }");
    assert!(diags
        .iter()
        .any(|d| d.category == triac_util::DiagnosticCategory::DivByZero));
}

#[test]
fn constant_folding_propagates_through_arithmetic() {
    let (ast, _, diags) = analyze_src("main { int a; a = 2 + 3 * 4; }");
    assert!(diags.is_empty());
    let main = &ast.unwrap().children[0];
    let stmts = &main.children.last().unwrap().children;
    let asign = stmts.iter().find(|n| n.kind == NodeKind::Asignacion).unwrap();
    assert_eq!(asign.computed_value, Some(ConstValue::Int(14)));
}

#[test]
fn bool_cannot_be_used_in_arithmetic() {
    let (_, _, diags) = analyze_src("main { int a; a = true + 1; }");
    assert!(diags
        .iter()
        .any(|d| d.category == triac_util::DiagnosticCategory::TypeIncompat));
}

#[test]
fn logical_operator_requires_bool_operands() {
    let (_, _, diags) = analyze_src("main { bool b; b = 1 && 2; }");
    assert!(diags
        .iter()
        .any(|d| d.category == triac_util::DiagnosticCategory::TypeIncompat));
}

#[test]
fn every_use_site_is_recorded() {
    let (_, table, _) = analyze_src("main { int a; a = 1; a = a + 1; }");
    let sym = table.peek("a").unwrap();
    assert!(sym.uses.len() >= 3);
}

#[test]
fn errors_are_sticky_through_parent_nodes() {
    let (ast, _, _) = analyze_src("main { int a; a = b + 1; }");
    let main = &ast.unwrap().children[0];
    let stmts = &main.children.last().unwrap().children;
    let asign = stmts.iter().find(|n| n.kind == NodeKind::Asignacion).unwrap();
    let rhs = &asign.children[0];
    assert_eq!(rhs.data_type, DataType::Error);
}

#[test]
fn missing_ast_reports_fatal_ast_invalid() {
    let (ast, _, diags) = analyze(None);
    assert!(ast.is_none());
    assert_eq!(diags.len(), 1);
    assert!(diags[0].fatal);
}
