use crate::{generate, Address, Opcode};
use triac_lex::lex;
use triac_par::parse;

fn ir_for(src: &str) -> Vec<crate::Quadruple> {
    let tokens = lex(src).tokens;
    let (ast, errs) = parse(&tokens);
    assert!(errs.is_empty(), "unexpected parse errors: {errs:?}");
    generate(ast.as_ref())
}

#[test]
fn empty_program_emits_no_quadruples() {
    assert!(ir_for("main { }").is_empty());
}

#[test]
fn missing_ast_emits_no_quadruples() {
    assert!(generate(None).is_empty());
}

#[test]
fn scenario_a_simple_assignment_and_output() {
    let quads = ir_for("main { int a; a = 2 + 3; cout << a; }");
    let rendered: Vec<String> = quads.iter().map(|q| q.to_string()).collect();
    assert_eq!(
        rendered,
        vec!["(add, 2, 3, t1)", "(asn, t1, a, _)", "(wri, a, _, _)"]
    );
}

#[test]
fn scenario_b_if_else() {
    let quads = ir_for("main { int x; x = 10; if x > 5 then cout << x; else cout << 0; end }");
    let rendered: Vec<String> = quads.iter().map(|q| q.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "(asn, 10, x, _)",
            "(gt, x, 5, t1)",
            "(if_f, t1, L1, _)",
            "(wri, x, _, _)",
            "(goto, L2, _, _)",
            "(lab, L1, _, _)",
            "(wri, 0, _, _)",
            "(lab, L2, _, _)",
        ]
    );
}

#[test]
fn scenario_c_while_loop_shape() {
    let quads = ir_for(
        "main { int i; int s; i = 1; s = 0; while i <= 3 s = s + i; i = i + 1; end cout << s; }",
    );
    // Exact temp/label numbering isn't spec-mandated for this scenario
    // (only the execution result is), but the loop shape is: one label
    // pair, a back-edge `goto`, and the accumulation/output quads.
    let ops: Vec<Opcode> = quads.iter().map(|q| q.op).collect();
    assert_eq!(
        ops,
        vec![
            Opcode::Asn, Opcode::Asn,      // i = 1; s = 0;
            Opcode::Lab,                    // loop top
            Opcode::Le,                     // i <= 3
            Opcode::IfF,                    // exit test
            Opcode::Add, Opcode::Asn,       // s = s + i
            Opcode::Add, Opcode::Asn,       // i = i + 1
            Opcode::Goto,                   // back edge
            Opcode::Lab,                    // loop end
            Opcode::Wri,                    // cout << s
        ]
    );
}

#[test]
fn scenario_f_do_until() {
    let quads = ir_for("main { int i; i = 0; do i = i + 1; until i == 3 cout << i; }");
    let rendered: Vec<String> = quads.iter().map(|q| q.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "(asn, 0, i, _)",
            "(lab, L1, _, _)",
            "(add, i, 1, t1)",
            "(asn, t1, i, _)",
            "(eq, i, 3, t2)",
            "(if_f, t2, L1, _)",
            "(lab, L2, _, _)",
            "(wri, i, _, _)",
        ]
    );
}

#[test]
fn do_while_uses_if_t_instead_of_if_f() {
    let quads = ir_for("main { int i; i = 0; do i = i + 1; while i < 3 }");
    let op_at_back_edge = quads
        .iter()
        .find(|q| q.op == Opcode::IfT || q.op == Opcode::IfF)
        .map(|q| q.op);
    assert_eq!(op_at_back_edge, Some(Opcode::IfT));
}

#[test]
fn chained_output_emits_one_wri_per_segment_in_order() {
    let quads = ir_for(r#"main { int n; n = 5; cout << "n=" << n; }"#);
    let wri_ops: Vec<&crate::Quadruple> = quads.iter().filter(|q| q.op == Opcode::Wri).collect();
    assert_eq!(wri_ops.len(), 2);
    assert_eq!(wri_ops[0].a1, Address::StringLit("n=".to_string()));
    assert_eq!(wri_ops[1].a1, Address::Name("n".to_string()));
}

#[test]
fn increment_desugars_into_an_add_and_assign() {
    let quads = ir_for("main { int a; a = 1; a++; }");
    let ops: Vec<Opcode> = quads.iter().map(|q| q.op).collect();
    assert_eq!(ops, vec![Opcode::Asn, Opcode::Add, Opcode::Asn]);
}

#[test]
fn undeclared_variable_still_lowers_scenario_d() {
    // spec.md scenario D: the IR may be empty or contain the assignment;
    // only the diagnostic is asserted elsewhere (triac-sem). Here we only
    // check that codegen itself never panics on an undeclared name.
    let quads = ir_for("main { a = 1; }");
    assert_eq!(quads.len(), 1);
    assert_eq!(quads[0].to_string(), "(asn, 1, a, _)");
}

#[test]
fn cin_lowers_to_rd() {
    let quads = ir_for("main { int a; cin >> a; }");
    assert_eq!(quads.len(), 1);
    assert_eq!(quads[0].op, Opcode::Rd);
    assert_eq!(quads[0].a1, Address::Name("a".to_string()));
}

#[test]
fn exponent_subtree_is_skipped_not_panicking() {
    // pot_op has no opcode in the normative set (spec.md §4.4); codegen
    // silently skips it rather than emitting a bogus instruction.
    let quads = ir_for("main { int a; a = 2 ^ 3; }");
    assert_eq!(quads.len(), 1);
    assert_eq!(quads[0].to_string(), "(asn, _, a, _)");
}
