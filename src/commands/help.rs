//! Help text generation.
//!
//! Both the `help` command listing and `<command> -help` are rendered from
//! the registry, so they always reflect what is actually registered.

use super::definitions::{CommandDef, ParamDef};
use super::registry::CommandRegistry;

/// Renders the `help` listing: one line per command in registration order.
pub fn render_command_list(registry: &CommandRegistry) -> String {
    let lines: Vec<String> = registry
        .list_commands()
        .map(|(name, description)| match description {
            Some(text) => format!("{name} -- {text}"),
            None => name.to_string(),
        })
        .collect();

    format!("Available commands:\n\n{}", lines.join("\n"))
}

/// Renders the help page shown by `<command> -help`.
pub fn render_command_help(command: &CommandDef) -> String {
    let mut text = match command.description() {
        Some(description) => format!("{description}\n\nParameters:"),
        None => "Parameters:".to_string(),
    };
    for param in command.params() {
        text.push('\n');
        text.push_str(&param_line(param));
    }
    text
}

fn param_line(param: &ParamDef) -> String {
    let help = match param.help_text() {
        Some(help) => help.to_string(),
        None => format!("Set {}", param.bound_name()),
    };
    format!(
        "{} {} -- {}",
        param.flag(),
        param.param_type().help_name(),
        help
    )
}
