//! Black-box tests of the built `mlc` binary: feed it ML source through a
//! temporary file, run it, and check the stdout of the program it produces.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn source_file(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

fn mlc() -> Command {
    Command::cargo_bin("mlc").unwrap()
}

#[test]
fn assignment_with_no_print_produces_no_output() {
    let src = source_file("x <- 2.3\n");
    mlc().arg(src.path()).assert().success().stdout("");
}

#[test]
fn printed_variable_shows_six_decimal_places() {
    let src = source_file("x <- 2.5\nprint x\n");
    mlc().arg(src.path()).assert().success().stdout("2.500000\n");
}

#[test]
fn printed_literal_shows_six_decimal_places() {
    let src = source_file("print 3.5\n");
    mlc().arg(src.path()).assert().success().stdout("3.500000\n");
}

#[test]
fn whole_number_product_prints_without_fraction() {
    let src = source_file("x <- 8\ny <- 3\nprint x * y\n");
    mlc().arg(src.path()).assert().success().stdout("24\n");
}

#[test]
fn function_call_as_a_bare_statement_prints_inside_the_body() {
    let src = source_file("function printsum a b\n\tprint a + b\nprintsum (12, 6)\n");
    mlc().arg(src.path()).assert().success().stdout("18\n");
}

#[test]
fn function_call_in_a_print_expression_uses_the_return_value() {
    let src = source_file("function multiply a b\n\treturn a * b\nprint multiply(12, 6)\n");
    mlc().arg(src.path()).assert().success().stdout("72\n");
}

#[test]
fn globals_are_visible_inside_function_bodies() {
    let src = source_file(
        "one <- 1\nfunction increment value\n\treturn value + one\nprint increment(3) + increment(4)\n",
    );
    mlc().arg(src.path()).assert().success().stdout("9\n");
}

#[test]
fn argument_references_default_to_zero_when_missing() {
    let src = source_file(
        "function add a b\n\treturn a + b\nfunction mul a b\n\treturn a * b\nprint add(arg2, 1)\nprint mul(arg0, 4)\nprint mul(arg1, 4)\nprint add(arg2024, 1)\n",
    );
    mlc()
        .arg(src.path())
        .args(["4", "5", "6"])
        .assert()
        .success()
        .stdout("7\n16\n20\n1\n");
}

#[test]
fn return_outside_a_function_is_a_reported_error() {
    let src = source_file("return bar\n");
    mlc()
        .arg(src.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("return"));
}

#[test]
fn reusing_a_parameter_name_as_a_variable_is_a_name_collision() {
    let src = source_file("function var a b c\n\tvar <- 1\n");
    mlc()
        .arg(src.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("name collision"));
}

#[test]
fn a_second_tab_on_one_line_is_a_redundant_tab_error() {
    let src = source_file("function abc\n\tvar <- 1\n\t\tx <- 1\n");
    mlc()
        .arg(src.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("redundant tab"));
}

#[test]
fn a_function_header_with_no_body_lines_is_an_empty_function_error() {
    let src = source_file("function abc\n");
    mlc()
        .arg(src.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty function"));
}

#[test]
fn a_function_header_inside_a_function_body_is_a_nested_function_error() {
    let src = source_file("function foo\n\tfunction bar\n");
    mlc()
        .arg(src.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("nested function"));
}

#[test]
fn a_missing_source_file_is_reported_rather_than_panicking() {
    mlc()
        .arg("/no/such/file/here.ml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read"));
}
