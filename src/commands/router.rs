//! Line parsing for registered commands.
//!
//! Turns a raw input line into a [`ParsedInvocation`]: the command entry and
//! the arguments given on the line, coerced to their declared types.

use tracing::debug;

use super::arguments::Arguments;
use super::definitions::{CommandDef, HELP_BOUND_NAME};
use super::registry::CommandRegistry;
use super::tokenizer::{looks_like_flag, split_line};
use crate::error::{Result, ShellError};

/// A command line that parsed successfully.
#[derive(Debug)]
pub struct ParsedInvocation<'a> {
    /// The command being invoked.
    pub command: &'a CommandDef,
    /// Arguments bound so far, keyed by bound name.
    pub args: Arguments,
}

impl ParsedInvocation<'_> {
    /// Returns true if `-help` was given on the line.
    pub fn wants_help(&self) -> bool {
        self.args.flag(HELP_BOUND_NAME)
    }
}

/// Command router for parsing user input.
pub struct CommandRouter;

impl CommandRouter {
    /// Parse one input line against the registry.
    ///
    /// Tokens after the command name are walked with a parity cursor. Flags
    /// are expected at odd positions until a flag without a value is seen;
    /// such a flag occupies a single token, so the expected parity flips.
    /// A flag followed by a non-flag token takes that token as its value.
    ///
    /// Errors:
    /// - [`ShellError::Unparseable`] for an unknown command or a value where a
    ///   flag is expected;
    /// - [`ShellError::UnknownFlag`] for a flag the command does not declare;
    /// - [`ShellError::InvalidFlagValue`] when a value fails to coerce.
    pub fn parse<'a>(registry: &'a CommandRegistry, line: &str) -> Result<ParsedInvocation<'a>> {
        let tokens = split_line(line);
        let raw_line = tokens.join(" ");
        let name = tokens[0];

        let command = registry
            .lookup(name)
            .ok_or_else(|| ShellError::unparseable(raw_line.as_str()))?;

        let mut args = Arguments::new();
        let mut odd_spot = true;

        for i in 1..tokens.len() {
            let flag_position = (i % 2 == 1) == odd_spot;
            if !flag_position {
                continue;
            }

            let token = tokens[i];
            if !looks_like_flag(token) {
                return Err(ShellError::unparseable(raw_line.as_str()));
            }

            let param = registry
                .resolve_flag(name, token)
                .ok_or_else(|| ShellError::UnknownFlag(token.to_string()))?;

            match tokens.get(i + 1) {
                Some(next) if !looks_like_flag(next) => {
                    let value = param.param_type().coerce_flag_value(next).ok_or_else(|| {
                        ShellError::InvalidFlagValue {
                            value: next.to_string(),
                            expected: param.param_type(),
                        }
                    })?;
                    args.insert(param.bound_name(), value);
                }
                _ => {
                    args.insert(param.bound_name(), param.presence_value());
                    odd_spot = !odd_spot;
                }
            }
        }

        debug!("Tokens: {:?} -> {} {:?}", tokens, name, args);
        Ok(ParsedInvocation { command, args })
    }
}
