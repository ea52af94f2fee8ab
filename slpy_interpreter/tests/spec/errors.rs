use slpy_interpreter::runtime::RuntimeError;
use slpy_interpreter::{run_source, Error};
use std::io::Cursor;

fn run_capture(source: &str) -> (Result<(), Error>, String) {
    let mut input = Cursor::new(Vec::new());
    let mut output = Vec::new();
    let result = run_source(source, &mut input, &mut output);
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn test_unbound_name_carries_the_offending_name() {
    let (result, _) = run_capture("x = 1\nprint(y)\n");
    match result.unwrap_err() {
        Error::Runtime(RuntimeError::UnboundName(name)) => assert_eq!(name, "y"),
        other => panic!("Expected unbound-name error, got {:?}", other),
    }
}

#[test]
fn test_unbound_name_in_assignment_right_hand_side() {
    let (result, _) = run_capture("x = y + 1\n");
    assert!(matches!(
        result.unwrap_err(),
        Error::Runtime(RuntimeError::UnboundName(_))
    ));
}

#[test]
fn test_no_output_after_the_failing_statement() {
    let (result, output) = run_capture("print(1)\nprint(z)\nprint(2)\n");
    assert!(result.is_err());
    assert_eq!(output, "1\n");
}

#[test]
fn test_block_stops_at_first_failure() {
    // The statements after the failing assignment must not run.
    let (result, output) = run_capture("x = 1 // 0\ny = 9\nprint(y)\n");
    assert!(matches!(
        result.unwrap_err(),
        Error::Runtime(RuntimeError::DivisionByZero)
    ));
    assert_eq!(output, "");
}

#[test]
fn test_syntax_errors_surface_with_their_line() {
    let (result, output) = run_capture("x = 1\nprint(\n");
    match result.unwrap_err() {
        Error::Syntax(e) => assert_eq!(e.line, 2),
        other => panic!("Expected syntax error, got {:?}", other),
    }
    // Nothing runs when parsing fails.
    assert_eq!(output, "");
}

#[test]
fn test_error_messages_are_presentable() {
    let (result, _) = run_capture("print(q)\n");
    let message = result.unwrap_err().to_string();
    assert!(message.contains("unbound name 'q'"));

    let (result, _) = run_capture("print(1 // 0)\n");
    let message = result.unwrap_err().to_string();
    assert!(message.contains("division by zero"));
}
