use slpy_interpreter::runtime::RuntimeError;
use slpy_interpreter::{run_source, Error};
use std::io::Cursor;

fn run(source: &str) -> Result<String, Error> {
    let mut input = Cursor::new(Vec::new());
    let mut output = Vec::new();
    run_source(source, &mut input, &mut output)?;
    Ok(String::from_utf8(output).unwrap())
}

#[test]
fn test_addition_and_subtraction() {
    assert_eq!(run("print(1 + 2)\n").unwrap(), "3\n");
    assert_eq!(run("print(1 - 2)\n").unwrap(), "-1\n");
}

#[test]
fn test_multiplication() {
    assert_eq!(run("print(6 * 7)\n").unwrap(), "42\n");
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(run("print(1 + 2 * 3)\n").unwrap(), "7\n");
    assert_eq!(run("print((1 + 2) * 3)\n").unwrap(), "9\n");
}

#[test]
fn test_operators_are_left_associative() {
    assert_eq!(run("print(10 - 3 - 2)\n").unwrap(), "5\n");
    assert_eq!(run("print(100 // 5 // 2)\n").unwrap(), "10\n");
}

#[test]
fn test_integer_division_truncates() {
    assert_eq!(run("print(7 // 2)\n").unwrap(), "3\n");
    assert_eq!(run("print(8 // 2)\n").unwrap(), "4\n");
}

#[test]
fn test_integer_division_truncates_toward_zero_for_negatives() {
    // Truncating semantics: -7 // 2 is -3, not the floored -4.
    assert_eq!(run("x = 0 - 7\nprint(x // 2)\n").unwrap(), "-3\n");
    assert_eq!(run("print(7 // (0 - 2))\n").unwrap(), "-3\n");
}

#[test]
fn test_division_by_zero_fails() {
    let error = run("print(5 // 0)\n").unwrap_err();
    assert!(matches!(
        error,
        Error::Runtime(RuntimeError::DivisionByZero)
    ));
}

#[test]
fn test_division_by_zero_after_evaluated_operand() {
    let error = run("x = 0\nprint((2 + 3) // x)\n").unwrap_err();
    assert!(matches!(
        error,
        Error::Runtime(RuntimeError::DivisionByZero)
    ));
}

#[test]
fn test_addition_wraps_on_overflow() {
    assert_eq!(
        run("print(9223372036854775807 + 1)\n").unwrap(),
        "-9223372036854775808\n"
    );
}

#[test]
fn test_division_overflow_wraps() {
    // i64::MIN // -1 wraps back to i64::MIN instead of trapping.
    let source = "x = 0 - 9223372036854775807 - 1\nprint(x // (0 - 1))\n";
    assert_eq!(run(source).unwrap(), "-9223372036854775808\n");
}
