//! End-to-end tests exercising the full facade: source in, artifacts and
//! an executable quadruple list out.

use crate::*;

#[test]
fn run_pipeline_scenario_a_produces_clean_artifacts() {
    let outcome = run_pipeline("main { int a; a = 2 + 3; cout << a; }");
    assert!(outcome.lex.errors.is_empty());
    assert!(outcome.parse_errors.is_empty());
    assert!(outcome.semantic_errors.is_empty());
    assert_eq!(outcome.quads.len(), 3);

    let report = execute(&outcome.quads, vec![], triac_vm::DEFAULT_MAX_STEPS).unwrap();
    assert_eq!(report.output, vec![triac_vm::Value::Int(5)]);
}

#[test]
fn run_pipeline_surfaces_semantic_errors_but_still_generates_quads() {
    let outcome = run_pipeline("main { int a; a = b; }");
    assert!(!outcome.semantic_errors.is_empty());
    assert!(!outcome.quads.is_empty());
}

#[test]
fn run_pipeline_on_empty_source_produces_no_tokens_and_no_quads() {
    let outcome = run_pipeline("");
    assert!(outcome.lex.tokens.is_empty());
    assert!(outcome.ast.is_none());
    assert!(outcome.quads.is_empty());
}

#[test]
fn artifacts_round_trip_through_a_tempdir() {
    let outcome = run_pipeline("main { int a; a = 2 + 3; cout << a; }");
    let dir = tempfile::tempdir().unwrap();

    let written = [
        ("tokens.txt", tokens_txt(&outcome.lex.tokens)),
        ("errores.txt", lexical_errors_txt(&outcome.lex.errors)),
        ("ast.txt", ast_txt(outcome.ast.as_ref())),
        ("errores_sintacticos.txt", syntax_errors_txt(&outcome.parse_errors)),
        ("tabla_simbolos.txt", symbol_table_txt(&outcome.symbols)),
        ("errores_semanticos.txt", semantic_errors_txt(&outcome.semantic_errors)),
    ];

    for (name, contents) in &written {
        std::fs::write(dir.path().join(name), contents).unwrap();
    }

    let tokens_back = std::fs::read_to_string(dir.path().join("tokens.txt")).unwrap();
    assert_eq!(read_tokens(&tokens_back), outcome.lex.tokens);

    let ast_back = std::fs::read_to_string(dir.path().join("ast.txt")).unwrap();
    assert_eq!(ast_back, outcome.ast.as_ref().unwrap().dump());
}

#[test]
fn execute_traced_visits_one_snapshot_per_step_and_matches_execute() {
    let outcome = run_pipeline("main { int a; a = 2 + 3; cout << a; }");
    let mut snapshots = Vec::new();
    let traced = execute_traced(&outcome.quads, vec![], triac_vm::DEFAULT_MAX_STEPS, |snap| {
        snapshots.push(snap.clone());
    })
    .unwrap();

    let plain = execute(&outcome.quads, vec![], triac_vm::DEFAULT_MAX_STEPS).unwrap();
    assert_eq!(traced.output, plain.output);
    assert_eq!(traced.steps, snapshots.len());
    assert_eq!(snapshots.last().unwrap().output, vec![triac_vm::Value::Int(5)]);
}

#[test]
fn lex_parse_analyze_generate_execute_are_independently_callable() {
    let lex_out = lex("main { int a; cin >> a; cout << a; }");
    let (ast, parse_errs) = parse(&lex_out.tokens);
    assert!(parse_errs.is_empty());
    let (_, _, sem_errs) = analyze(ast.as_ref());
    assert!(sem_errs.is_empty());
    let quads = generate(ast.as_ref());
    let report = execute(&quads, vec!["9".to_string()], triac_vm::DEFAULT_MAX_STEPS).unwrap();
    assert_eq!(report.output, vec![triac_vm::Value::Int(9)]);
}
