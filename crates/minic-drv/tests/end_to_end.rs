//! Process-level integration tests for the `minic` binary, covering the
//! concrete scenarios from spec.md §8.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp source file");
    write!(file, "{contents}").expect("write temp source file");
    file
}

#[test]
fn factorial_sample_reads_five_and_prints_120() {
    let file = source_file(
        "\
func fact(n: Int): Int {
    if n <= 1 {
        return 1
    }
    return n * fact(n: n - 1)
}
func main(): Int {
    var n: Int
    n = input()
    print(val: fact(n: n))
    return 0
}",
    );

    Command::cargo_bin("minic")
        .unwrap()
        .arg(file.path())
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout("120\n");
}

#[test]
fn arithmetic_precedence_exits_with_five_and_prints_nothing() {
    let file = source_file("func main(): Int { return 1 + 2 * 3 - 4 / 2 }");

    Command::cargo_bin("minic")
        .unwrap()
        .arg(file.path())
        .assert()
        .code(5)
        .stdout("");
}

#[test]
fn right_associative_assignment_exits_with_fourteen() {
    let file = source_file(
        "var a: Int\nvar b: Int\nfunc main(): Int { a = b = 7\n return a + b }",
    );

    Command::cargo_bin("minic")
        .unwrap()
        .arg(file.path())
        .assert()
        .code(14);
}

#[test]
fn named_argument_reordering_yields_seven() {
    let file = source_file(
        "func sub(a: Int, b: Int): Int { return a - b }\n\
         func main(): Int { return sub(b: 3, a: 10) }",
    );

    Command::cargo_bin("minic")
        .unwrap()
        .arg(file.path())
        .assert()
        .code(7);
}

#[test]
fn division_by_zero_is_a_nonzero_exit_with_a_stderr_message() {
    let file = source_file("func main(): Int { return 1 / 0 }");

    Command::cargo_bin("minic")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("division by zero"));
}

#[test]
fn missing_main_is_a_front_end_error_before_any_execution() {
    let file = source_file("func helper(): Int { return 0 }");

    Command::cargo_bin("minic")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("main"));
}

#[test]
fn dump_ast_prints_structure_and_exits_before_running() {
    let file = source_file("func main(): Int { return 1 }");

    Command::cargo_bin("minic")
        .unwrap()
        .arg(file.path())
        .arg("--dump-ast")
        .assert()
        .success()
        .stdout(predicate::str::contains("FuncDecl"));
}

#[test]
fn dump_assembly_prints_disassembly_and_exits_before_running() {
    let file = source_file("func main(): Int { return 1 }");

    Command::cargo_bin("minic")
        .unwrap()
        .arg(file.path())
        .arg("--dump-assembly")
        .assert()
        .success()
        .stdout(predicate::str::contains("func main"));
}

#[test]
fn exit_builtin_halts_with_exit_code_zero() {
    let file = source_file("func main(): Int { exit() return 99 }");

    Command::cargo_bin("minic")
        .unwrap()
        .arg(file.path())
        .assert()
        .code(0);
}

#[test]
fn negative_return_value_wraps_into_the_exit_code_range() {
    let file = source_file("func main(): Int { return 0 - 1 }");

    Command::cargo_bin("minic")
        .unwrap()
        .arg(file.path())
        .assert()
        .code(255);
}
