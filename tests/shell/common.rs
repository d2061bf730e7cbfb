//! Common test utilities for shell sessions.

use trucli::commands::{CapturedOutput, CommandRegistry, ScriptedInput, Shell};
use trucli::demo::register_demo_commands;

pub type TestShell = Shell<ScriptedInput, CapturedOutput>;

/// Builds a shell with the example commands and the given prompt responses.
pub fn demo_shell(responses: &[&str]) -> TestShell {
    let mut registry = CommandRegistry::new();
    register_demo_commands(&mut registry).expect("demo commands register");
    Shell::new(
        registry,
        ScriptedInput::new(responses.iter().copied()),
        CapturedOutput::new(),
    )
}

/// Executes one line and returns everything it wrote.
pub fn run_line(shell: &mut TestShell, line: &str) -> String {
    shell.output_mut().clear();
    shell.execute_line(line).expect("line executes");
    shell.output().contents()
}
