use crate::{execute, Interpreter, RuntimeFault, StepOutcome, Value, DEFAULT_MAX_STEPS};
use triac_ir::{generate, Address, Opcode, Quadruple};
use triac_lex::lex;
use triac_par::parse;

fn run(src: &str) -> Vec<Value> {
    let tokens = lex(src).tokens;
    let (ast, errs) = parse(&tokens);
    assert!(errs.is_empty(), "unexpected parse errors: {errs:?}");
    let quads = generate(ast.as_ref());
    execute(&quads, vec![], DEFAULT_MAX_STEPS)
        .expect("expected successful execution")
        .output
}

#[test]
fn scenario_a_simple_assignment_and_output() {
    assert_eq!(run("main { int a; a = 2 + 3; cout << a; }"), vec![Value::Int(5)]);
}

#[test]
fn scenario_b_if_else() {
    assert_eq!(
        run("main { int x; x = 10; if x > 5 then cout << x; else cout << 0; end }"),
        vec![Value::Int(10)]
    );
}

#[test]
fn scenario_c_while_loop_with_accumulation() {
    let src = "main { int i; int s; i = 1; s = 0;
       while i <= 3 s = s + i; i = i + 1; end
       cout << s; }";
    assert_eq!(run(src), vec![Value::Int(6)]);
}

#[test]
fn scenario_f_do_until() {
    let src = "main { int i; i = 0; do i = i + 1; until i == 3 cout << i; }";
    assert_eq!(run(src), vec![Value::Int(3)]);
}

#[test]
fn do_while_loops_while_condition_holds() {
    let src = "main { int i; i = 0; do i = i + 1; while i < 3 cout << i; }";
    assert_eq!(run(src), vec![Value::Int(3)]);
}

#[test]
fn cin_reads_from_the_input_queue() {
    let tokens = lex("main { int a; cin >> a; cout << a; }").tokens;
    let (ast, errs) = parse(&tokens);
    assert!(errs.is_empty());
    let quads = generate(ast.as_ref());
    let report = execute(&quads, vec!["7".to_string()], DEFAULT_MAX_STEPS).unwrap();
    assert_eq!(report.output, vec![Value::Int(7)]);
}

#[test]
fn missing_input_defaults_to_zero() {
    let tokens = lex("main { int a; cin >> a; cout << a; }").tokens;
    let (ast, _) = parse(&tokens);
    let quads = generate(ast.as_ref());
    let report = execute(&quads, vec![], DEFAULT_MAX_STEPS).unwrap();
    assert_eq!(report.output, vec![Value::Int(0)]);
}

#[test]
fn division_by_zero_aborts_with_current_pc() {
    let tokens = lex("main { int a; a = 1 / 0; }").tokens;
    let (ast, _) = parse(&tokens);
    let quads = generate(ast.as_ref());
    let err = execute(&quads, vec![], DEFAULT_MAX_STEPS).unwrap_err();
    assert!(matches!(err, RuntimeFault::DivByZero { pc: 0 }));
}

#[test]
fn unbounded_loop_aborts_as_runaway() {
    let src = "main { int i; i = 0; while i >= 0 i = i + 1; end }";
    let tokens = lex(src).tokens;
    let (ast, _) = parse(&tokens);
    let quads = generate(ast.as_ref());
    let err = execute(&quads, vec![], 100).unwrap_err();
    assert_eq!(err, RuntimeFault::Runaway { max_steps: 100 });
}

#[test]
fn goto_to_a_missing_label_is_reported() {
    let quads = vec![Quadruple::new(Opcode::Goto, Address::Label(99), Address::None, Address::None)];
    let err = execute(&quads, vec![], DEFAULT_MAX_STEPS).unwrap_err();
    assert!(matches!(err, RuntimeFault::LabelNotFound { pc: 0, .. }));
}

#[test]
fn halt_stops_execution_immediately() {
    let quads = vec![
        Quadruple::new(Opcode::Wri, Address::IntLit(1), Address::None, Address::None),
        Quadruple::new(Opcode::Halt, Address::None, Address::None, Address::None),
        Quadruple::new(Opcode::Wri, Address::IntLit(2), Address::None, Address::None),
    ];
    let report = execute(&quads, vec![], DEFAULT_MAX_STEPS).unwrap();
    assert_eq!(report.output, vec![Value::Int(1)]);
    assert_eq!(report.steps, 2);
}

#[test]
fn snapshot_reflects_state_between_steps() {
    let tokens = lex("main { int a; a = 2 + 3; cout << a; }").tokens;
    let (ast, _) = parse(&tokens);
    let quads = generate(ast.as_ref());
    let mut interp = Interpreter::new(&quads, vec![]);

    let before = interp.snapshot();
    assert_eq!(before.pc, 0);
    assert!(before.memory.is_empty());
    assert!(before.next_instruction.is_some());

    while interp.step().unwrap() == StepOutcome::Continue {}

    let after = interp.snapshot();
    assert_eq!(after.output, vec![Value::Int(5)]);
    assert!(after.next_instruction.is_none());
    assert!(after.to_string().contains("Salida: [5]"));
}

#[test]
fn uninitialized_read_defaults_to_zero() {
    let quads = vec![Quadruple::new(
        Opcode::Wri,
        Address::Name("never_assigned".to_string()),
        Address::None,
        Address::None,
    )];
    let report = execute(&quads, vec![], DEFAULT_MAX_STEPS).unwrap();
    assert_eq!(report.output, vec![Value::Int(0)]);
}
