//! Registration through the public API.

use trucli::commands::{CapturedOutput, CommandOutput, ScriptedInput};
use trucli::{CommandRegistry, Handler, ParamDef, ParamType, Shell, ShellError};

#[test]
fn test_lookup_after_register_counts_help_param() {
    let mut registry = CommandRegistry::new();
    let params = vec![
        ParamDef::with_default("-n", "name", "World").unwrap(),
        ParamDef::with_prompt("-c", "count", ParamType::Integer, "Count").unwrap(),
        ParamDef::switch("-v", "verbose").unwrap(),
    ];
    registry
        .register("greet", Handler::new(|_| Ok(None)), params)
        .unwrap();

    let entry = registry.lookup("greet").unwrap();
    assert_eq!(entry.params().len(), 4);
    assert_eq!(entry.params().last().unwrap().flag(), "-help");
}

#[test]
fn test_missing_default_and_prompt_rejected() {
    for ty in [ParamType::String, ParamType::Integer, ParamType::Float] {
        let result = ParamDef::new("-x", "x", ty, None, None);
        assert!(matches!(result, Err(ShellError::Configuration(_))));
    }
}

#[test]
fn test_flag_collisions_rejected() {
    let mut registry = CommandRegistry::new();

    let duplicate = vec![
        ParamDef::with_default("-n", "a", 1).unwrap(),
        ParamDef::with_default("-n", "b", 2).unwrap(),
    ];
    let err = registry
        .register("dup", Handler::new(|_| Ok(None)), duplicate)
        .unwrap_err();
    assert_eq!(err.category(), "Configuration Error");

    let reserved = vec![ParamDef::with_default("-help", "text", "x").unwrap()];
    assert!(registry
        .register("reserved", Handler::new(|_| Ok(None)), reserved)
        .is_err());

    assert_eq!(registry.len(), 1);
}

#[test]
fn test_handler_without_result_prints_nothing() {
    let mut registry = CommandRegistry::new();
    registry
        .register("noop", Handler::new(|_| Ok(None)), Vec::new())
        .unwrap();
    registry
        .register(
            "listed",
            Handler::new(|_| Ok(Some(CommandOutput::info("shown")))).with_description("Shows"),
            Vec::new(),
        )
        .unwrap();

    let mut shell = Shell::new(registry, ScriptedInput::default(), CapturedOutput::new());
    shell.run_lines(["noop", "listed", "help"]).unwrap();

    assert_eq!(
        shell.output().lines(),
        ["shown", "Available commands:\n\nhelp -- Display this text\nnoop\nlisted -- Shows"]
    );
}

#[test]
fn test_independent_shells() {
    let build = || {
        let mut registry = CommandRegistry::new();
        registry
            .register(
                "count",
                Handler::new(|args| Ok(Some(CommandOutput::value(args.get_int("n").unwrap_or(0))))),
                vec![ParamDef::with_default("-n", "n", 0).unwrap()],
            )
            .unwrap();
        Shell::new(registry, ScriptedInput::default(), CapturedOutput::new())
    };

    let mut first = build();
    let mut second = build();
    first.execute_line("count -n 1").unwrap();
    second.execute_line("count -n 2").unwrap();

    assert_eq!(first.output().lines(), ["1"]);
    assert_eq!(second.output().lines(), ["2"]);
}
