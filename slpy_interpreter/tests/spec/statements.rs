use slpy_interpreter::{interpreter, run_source, Error};
use std::io::Cursor;

fn run(source: &str) -> Result<String, Error> {
    let mut input = Cursor::new(Vec::new());
    let mut output = Vec::new();
    run_source(source, &mut input, &mut output)?;
    Ok(String::from_utf8(output).unwrap())
}

#[test]
fn test_assign_then_print() {
    assert_eq!(run("x = 42\nprint(x)\n").unwrap(), "42\n");
}

#[test]
fn test_reassignment_overwrites() {
    assert_eq!(run("x = 1\nx = 2\nprint(x)\n").unwrap(), "2\n");
}

#[test]
fn test_assignment_is_a_snapshot_not_a_lazy_binding() {
    // y captures the value of x at assignment time; a later rebind of x
    // must not change y.
    let source = "x = 3\ny = x + 4\nx = 100\nprint(y)\n";
    assert_eq!(run(source).unwrap(), "7\n");
}

#[test]
fn test_end_to_end_straight_line_program() {
    let source = "x = 3\ny = x + 4\nprint(y)\n";
    assert_eq!(run(source).unwrap(), "7\n");
}

#[test]
fn test_pass_produces_no_output() {
    assert_eq!(run("pass\n").unwrap(), "");
    assert_eq!(run("pass\nprint(1)\npass\n").unwrap(), "1\n");
}

#[test]
fn test_empty_program_produces_no_output() {
    assert_eq!(run("").unwrap(), "");
}

#[test]
fn test_statements_execute_top_to_bottom() {
    assert_eq!(run("print(1)\nprint(2)\nprint(3)\n").unwrap(), "1\n2\n3\n");
}

#[test]
fn test_comments_and_blank_lines_are_ignored() {
    let source = "# a comment\n\nx = 5  # inline\n\nprint(x)\n";
    assert_eq!(run(source).unwrap(), "5\n");
}

#[test]
fn test_rerunning_a_program_is_independent() {
    let program = slpy_parser::parse("x = 3\ny = x + 4\nprint(y)\n").unwrap();

    let mut first = Vec::new();
    let mut input = Cursor::new(Vec::new());
    interpreter::run(&program, &mut input, &mut first).unwrap();

    let mut second = Vec::new();
    let mut input = Cursor::new(Vec::new());
    interpreter::run(&program, &mut input, &mut second).unwrap();

    assert_eq!(first, second);
    assert_eq!(String::from_utf8(first).unwrap(), "7\n");
}
