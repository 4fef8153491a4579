//! End-to-end CLI tests driving the built `triat` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn triat_bin() -> Command {
    Command::cargo_bin("triat").unwrap()
}

#[test]
fn help_lists_the_run_subcommand() {
    triat_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"));
}

#[test]
fn version_flag_prints_version() {
    triat_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn run_to_execute_stage_prints_cout_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("program.tri");
    std::fs::write(&input, "main { int a; a = 2 + 3; cout << a; }").unwrap();
    let out_dir = dir.path().join("out");

    triat_bin()
        .arg("run")
        .arg(&input)
        .arg("--output")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("5"));

    assert!(out_dir.join("tokens.txt").is_file());
    assert!(out_dir.join("quads.txt").is_file());
    assert!(out_dir.join("resultado.txt").is_file());
}

#[test]
fn run_to_lex_stage_skips_later_artifacts() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("program.tri");
    std::fs::write(&input, "main { int a; }").unwrap();
    let out_dir = dir.path().join("out");

    triat_bin()
        .arg("run")
        .arg(&input)
        .arg("--output")
        .arg(&out_dir)
        .arg("--stage")
        .arg("lex")
        .assert()
        .success();

    assert!(out_dir.join("tokens.txt").is_file());
    assert!(!out_dir.join("ast.txt").exists());
}

#[test]
fn run_with_input_values_feeds_cin() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("program.tri");
    std::fs::write(&input, "main { int a; cin >> a; cout << a; }").unwrap();
    let out_dir = dir.path().join("out");

    triat_bin()
        .arg("run")
        .arg(&input)
        .arg("--output")
        .arg(&out_dir)
        .arg("--input-value")
        .arg("42")
        .assert()
        .success()
        .stdout(predicate::str::contains("42"));
}

#[test]
fn trace_flag_prints_snapshots_to_stderr() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("program.tri");
    std::fs::write(&input, "main { int a; a = 2 + 3; cout << a; }").unwrap();
    let out_dir = dir.path().join("out");

    triat_bin()
        .arg("run")
        .arg(&input)
        .arg("--output")
        .arg(&out_dir)
        .arg("--trace")
        .assert()
        .success()
        .stdout(predicate::str::contains("5"))
        .stderr(predicate::str::contains("Próxima instrucción"));
}

#[test]
fn missing_input_file_fails_with_nonzero_exit() {
    let dir = TempDir::new().unwrap();

    triat_bin()
        .arg("run")
        .arg(dir.path().join("missing.tri"))
        .assert()
        .failure();
}

#[test]
fn unknown_stage_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("program.tri");
    std::fs::write(&input, "main { int a; }").unwrap();

    triat_bin()
        .arg("run")
        .arg(&input)
        .arg("--stage")
        .arg("nonsense")
        .assert()
        .failure();
}
