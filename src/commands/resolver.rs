//! Interactive resolution of missing arguments.

use tracing::debug;

use super::arguments::Arguments;
use super::definitions::CommandDef;
use super::io::LineInput;
use crate::error::{Result, ShellError};

/// Fills every parameter of `command` missing from `args`.
///
/// Parameters with a default take it; the rest are requested through
/// `input` using their prompt text. A response that fails to coerce aborts
/// resolution with [`ShellError::InvalidPromptResponse`].
pub fn resolve_missing(
    command: &CommandDef,
    args: &mut Arguments,
    input: &mut dyn LineInput,
) -> Result<()> {
    for param in command.params() {
        if args.contains(param.bound_name()) {
            continue;
        }

        if let Some(default) = param.default_value() {
            args.insert(param.bound_name(), default.clone());
            continue;
        }

        let prompt = format!("{}: ", param.prompt().unwrap_or(param.bound_name()));
        let response = input.read_line(&prompt)?.ok_or(ShellError::InputClosed)?;
        let value = param.param_type().coerce(&response).ok_or_else(|| {
            ShellError::InvalidPromptResponse {
                value: response.clone(),
                expected: param.param_type(),
            }
        })?;
        debug!("Resolved {} interactively", param.bound_name());
        args.insert(param.bound_name(), value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::io::ScriptedInput;
    use crate::commands::{CommandRegistry, Handler, ParamDef, ParamType, Value};

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry
            .register(
                "add",
                Handler::new(|_| Ok(None)),
                vec![
                    ParamDef::with_prompt("-a", "a", ParamType::Integer, "First number").unwrap(),
                    ParamDef::with_prompt("-b", "b", ParamType::Integer, "Second number")
                        .unwrap(),
                    ParamDef::switch("-v", "verbose").unwrap(),
                ],
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_defaults_applied_without_prompting() {
        let registry = registry();
        let command = registry.lookup("add").unwrap();
        let mut args: Arguments = [("a", 1), ("b", 2)].into_iter().collect();
        let mut input = ScriptedInput::default();

        resolve_missing(command, &mut args, &mut input).unwrap();

        assert!(input.prompts().is_empty());
        assert_eq!(args.get("verbose"), Some(&Value::Bool(false)));
        assert_eq!(args.get("help"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_prompts_in_declaration_order() {
        let registry = registry();
        let command = registry.lookup("add").unwrap();
        let mut args = Arguments::new();
        let mut input = ScriptedInput::new(["3", "4"]);

        resolve_missing(command, &mut args, &mut input).unwrap();

        assert_eq!(input.prompts(), ["First number: ", "Second number: "]);
        assert_eq!(args.get_int("a"), Some(3));
        assert_eq!(args.get_int("b"), Some(4));
    }

    #[test]
    fn test_present_argument_not_prompted() {
        let registry = registry();
        let command = registry.lookup("add").unwrap();
        let mut args: Arguments = [("a", 10)].into_iter().collect();
        let mut input = ScriptedInput::new(["5"]);

        resolve_missing(command, &mut args, &mut input).unwrap();

        assert_eq!(input.prompts(), ["Second number: "]);
        assert_eq!(args.get_int("a"), Some(10));
        assert_eq!(args.get_int("b"), Some(5));
    }

    #[test]
    fn test_invalid_response_aborts() {
        let registry = registry();
        let command = registry.lookup("add").unwrap();
        let mut args = Arguments::new();
        let mut input = ScriptedInput::new(["three", "4"]);

        let err = resolve_missing(command, &mut args, &mut input).unwrap_err();

        assert_eq!(err.to_string(), "three is not a int");
        assert_eq!(input.remaining(), 1);
        assert!(!args.contains("b"));
    }

    #[test]
    fn test_end_of_input_while_prompting() {
        let registry = registry();
        let command = registry.lookup("add").unwrap();
        let mut args = Arguments::new();
        let mut input = ScriptedInput::default();

        let err = resolve_missing(command, &mut args, &mut input).unwrap_err();
        assert!(matches!(err, ShellError::InputClosed));
    }
}
