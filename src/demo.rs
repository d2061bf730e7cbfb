//! Example commands used by the `trucli` binary.

use anyhow::anyhow;

use crate::commands::{CommandOutput, CommandRegistry, Handler, ParamDef, ParamType};
use crate::error::Result;

/// Greeting printed before the first prompt.
pub const BANNER: &str = "Initializing example code. Try the 'hello' command!";

/// Registers the example commands.
pub fn register_demo_commands(registry: &mut CommandRegistry) -> Result<()> {
    registry.register(
        "hello",
        Handler::new(|args| {
            let name = args
                .get("name")
                .map(ToString::to_string)
                .unwrap_or_default();
            Ok(Some(CommandOutput::info(format!("Hello {name}"))))
        })
        .with_description("Greets a person."),
        vec![ParamDef::with_default("-n", "name", "World")?.help("Specify the name to be greeted")],
    )?;

    registry.register(
        "add",
        Handler::new(|args| {
            let a = args.get_int("a").unwrap_or_default();
            let b = args.get_int("b").unwrap_or_default();
            let sum = a
                .checked_add(b)
                .ok_or_else(|| anyhow!("{a} + {b} overflows"))?;
            Ok(Some(CommandOutput::value(sum)))
        })
        .with_description("Adds two integers."),
        vec![
            ParamDef::with_prompt("-a", "a", ParamType::Integer, "First number")?,
            ParamDef::with_prompt("-b", "b", ParamType::Integer, "Second number")?,
        ],
    )?;

    registry.register(
        "scale",
        Handler::new(|args| {
            let x = args.get_float("x").unwrap_or_default();
            let factor = args.get_float("factor").unwrap_or(1.0);
            let scaled = x * factor;
            if args.flag("round") {
                Ok(Some(CommandOutput::value(scaled.round() as i64)))
            } else {
                Ok(Some(CommandOutput::value(scaled)))
            }
        })
        .with_description("Multiplies a number by a factor."),
        vec![
            ParamDef::with_prompt("-x", "x", ParamType::Float, "Number to scale")?,
            ParamDef::with_default("-f", "factor", 2.0)?.help("Multiplier"),
            ParamDef::switch("-r", "round")?.help("Round to the nearest integer"),
        ],
    )?;

    registry.register(
        "powers",
        Handler::new(|args| {
            let n = args.get_int("count").unwrap_or_default();
            if !(0..=20).contains(&n) {
                return Ok(Some(CommandOutput::info(format!(
                    "{n} is out of range (0-20)"
                ))));
            }
            let rows = (1..=n)
                .map(|i| vec![i.to_string(), (i * i).to_string(), (i * i * i).to_string()])
                .collect();
            Ok(Some(CommandOutput::table(
                vec!["n".to_string(), "n^2".to_string(), "n^3".to_string()],
                rows,
            )))
        })
        .with_description("Prints squares and cubes of the first N integers."),
        vec![ParamDef::with_default("-n", "count", 5)?.help("How many rows")],
    )?;

    registry.register(
        "quit",
        Handler::new(|_| Ok(Some(CommandOutput::exit()))).with_description("Exit the shell"),
        Vec::new(),
    )?;

    Ok(())
}
