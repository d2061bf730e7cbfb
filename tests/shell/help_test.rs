//! Generated help output.

use super::common::{demo_shell, run_line};
use pretty_assertions::assert_eq;

#[test]
fn test_help_lists_commands_in_registration_order() {
    let mut shell = demo_shell(&[]);
    assert_eq!(
        run_line(&mut shell, "help"),
        "Available commands:\n\n\
         help -- Display this text\n\
         hello -- Greets a person.\n\
         add -- Adds two integers.\n\
         scale -- Multiplies a number by a factor.\n\
         powers -- Prints squares and cubes of the first N integers.\n\
         quit -- Exit the shell"
    );
}

#[test]
fn test_hello_help_does_not_invoke_handler() {
    let mut shell = demo_shell(&[]);
    let output = run_line(&mut shell, "hello -help");
    assert_eq!(
        output,
        "Greets a person.\n\nParameters:\n\
         -n str -- Specify the name to be greeted\n\
         -help  -- Display this text"
    );
    assert!(!output.contains("Hello"));
}

#[test]
fn test_help_wins_over_other_flags() {
    let mut shell = demo_shell(&[]);
    let output = run_line(&mut shell, "add -a 1 -help");
    assert!(output.starts_with("Adds two integers.\n\nParameters:\n"));
    assert!(shell.input().prompts().is_empty());
}

#[test]
fn test_help_with_trailing_value_still_shows_help() {
    let mut shell = demo_shell(&[]);
    let expected = "Greets a person.\n\nParameters:\n\
                    -n str -- Specify the name to be greeted\n\
                    -help  -- Display this text";
    assert_eq!(run_line(&mut shell, "hello -help x"), expected);
    assert_eq!(run_line(&mut shell, "hello -help 0"), expected);
}

#[test]
fn test_scale_help_mixes_typed_and_switch_params() {
    let mut shell = demo_shell(&[]);
    assert_eq!(
        run_line(&mut shell, "scale -help"),
        "Multiplies a number by a factor.\n\nParameters:\n\
         -x float -- Set x\n\
         -f float -- Multiplier\n\
         -r  -- Round to the nearest integer\n\
         -help  -- Display this text"
    );
}

#[test]
fn test_help_command_has_its_own_help() {
    let mut shell = demo_shell(&[]);
    assert_eq!(
        run_line(&mut shell, "help -help"),
        "Display this text\n\nParameters:\n-help  -- Display this text"
    );
}
