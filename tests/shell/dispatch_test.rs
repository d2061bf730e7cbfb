//! End-to-end dispatch of single lines and whole sessions.

use super::common::{demo_shell, run_line};
use pretty_assertions::assert_eq;
use trucli::commands::{CommandRouter, Value};
use trucli::ShellError;

#[test]
fn test_hello_with_name_does_not_prompt() {
    let mut shell = demo_shell(&[]);
    assert_eq!(run_line(&mut shell, "hello -n Alice"), "Hello Alice");
    assert!(shell.input().prompts().is_empty());
}

#[test]
fn test_hello_parses_to_name_only() {
    let shell = demo_shell(&[]);
    let parsed = CommandRouter::parse(shell.registry(), "hello -n Alice").unwrap();
    assert_eq!(parsed.args.len(), 1);
    assert_eq!(parsed.args.get("name"), Some(&Value::from("Alice")));
}

#[test]
fn test_hello_uses_default() {
    let mut shell = demo_shell(&[]);
    assert_eq!(run_line(&mut shell, "hello"), "Hello World");
}

#[test]
fn test_hello_trailing_flag_binds_true() {
    // A typed flag with no value takes the boolean branch and binds `true`.
    let mut shell = demo_shell(&[]);
    assert_eq!(run_line(&mut shell, "hello -n"), "Hello true");

    let parsed = CommandRouter::parse(shell.registry(), "hello -n").unwrap();
    assert_eq!(parsed.args.get("name"), Some(&Value::Bool(true)));
}

#[test]
fn test_invalid_integer_flag_value() {
    let mut shell = demo_shell(&[]);
    assert_eq!(run_line(&mut shell, "add -a abc -b 2"), "abc is not a valid int");
    assert!(shell.input().prompts().is_empty());
}

#[test]
fn test_add_prompts_for_missing_numbers() {
    let mut shell = demo_shell(&["40", "2"]);
    assert_eq!(run_line(&mut shell, "add"), "42");
    assert_eq!(shell.input().prompts(), ["First number: ", "Second number: "]);
}

#[test]
fn test_add_prompts_only_for_missing_number() {
    let mut shell = demo_shell(&["-3"]);
    assert_eq!(run_line(&mut shell, "add -a 10"), "7");
    assert_eq!(shell.input().prompts(), ["Second number: "]);
}

#[test]
fn test_invalid_prompt_response() {
    let mut shell = demo_shell(&["ten"]);
    assert_eq!(run_line(&mut shell, "add -b 1"), "ten is not a int");
}

#[test]
fn test_scale_with_switch_and_default() {
    let mut shell = demo_shell(&["1.25"]);
    assert_eq!(run_line(&mut shell, "scale"), "2.5");
    assert_eq!(run_line(&mut shell, "scale -x 1.3 -r -f 3"), "4");
    assert_eq!(run_line(&mut shell, "scale -r -x 2 -f 0.5"), "1");
}

#[test]
fn test_powers_table() {
    let mut shell = demo_shell(&[]);
    assert_eq!(
        run_line(&mut shell, "powers -n 3"),
        "n | n^2 | n^3\n--+-----+----\n1 | 1   | 1  \n2 | 4   | 8  \n3 | 9   | 27"
    );
}

#[test]
fn test_unknown_command_and_flag() {
    let mut shell = demo_shell(&[]);
    assert_eq!(
        run_line(&mut shell, "goodbye"),
        "goodbye: Could not parse command."
    );
    assert_eq!(run_line(&mut shell, "hello -name Bob"), "Unknown flag: -name");
    assert_eq!(
        run_line(&mut shell, "hello Bob"),
        "hello Bob: Could not parse command."
    );
}

#[test]
fn test_overflow_is_handler_error() {
    let mut shell = demo_shell(&[]);
    let err = shell
        .execute_line("add -a 9223372036854775807 -b 1")
        .unwrap_err();
    assert!(matches!(err, ShellError::Handler(_)));
    assert!(err.to_string().contains("overflows"));
}

#[test]
fn test_session_recovers_from_bad_lines() {
    let mut shell = demo_shell(&[
        "hello -n Ann",
        "hello -x",
        "add -a 1",
        "oops",
        "add -a 9223372036854775807 -b 1",
        "hello",
        "quit",
        "hello -n Never",
    ]);
    shell.run().unwrap();

    assert_eq!(
        shell.output().lines(),
        [
            "Hello Ann",
            "Unknown flag: -x",
            "oops is not a int",
            "Error: 9223372036854775807 + 1 overflows",
            "Hello World",
        ]
    );
    assert!(shell.exit_requested());
    assert_eq!(shell.input().remaining(), 1);
}
