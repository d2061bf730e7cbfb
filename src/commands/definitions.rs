//! Command definitions: parameter descriptors, handlers, and command entries.
//!
//! A [`CommandDef`] is created once by [`CommandRegistry::register`] and is
//! immutable afterwards. Its parameter list always ends with the implicit
//! `-help` switch.
//!
//! [`CommandRegistry::register`]: super::registry::CommandRegistry::register

use std::fmt;

use super::arguments::Arguments;
use super::help;
use super::output::CommandOutput;
use super::registry::CommandRegistry;
use super::tokenizer::looks_like_flag;
use super::value::{ParamType, Value};
use crate::error::{Result, ShellError};

/// Flag reserved for per-command help.
pub const HELP_FLAG: &str = "-help";
/// Bound name of the implicit help switch.
pub const HELP_BOUND_NAME: &str = "help";
const HELP_TEXT: &str = "Display this text";

/// Definition of a command parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDef {
    flag: String,
    bound_name: String,
    param_type: ParamType,
    default: Option<Value>,
    prompt: Option<String>,
    help: Option<String>,
}

impl ParamDef {
    /// Creates a parameter descriptor, validating the default/prompt invariant.
    ///
    /// Non-boolean parameters need exactly one of `default` or `prompt`.
    /// Boolean parameters never prompt and default to `false`.
    pub fn new(
        flag: impl Into<String>,
        bound_name: impl Into<String>,
        param_type: ParamType,
        default: Option<Value>,
        prompt: Option<String>,
    ) -> Result<Self> {
        let flag = flag.into();
        let bound_name = bound_name.into();

        if !looks_like_flag(&flag) || flag.len() < 2 || flag.contains(' ') {
            return Err(ShellError::configuration(format!(
                "flag '{flag}' must start with '-' followed by a name"
            )));
        }
        if bound_name.is_empty() {
            return Err(ShellError::configuration(format!(
                "{flag} has an empty bound name"
            )));
        }
        if let Some(value) = &default {
            if value.param_type() != param_type {
                return Err(ShellError::configuration(format!(
                    "{flag} declares type {param_type} but its default is a {}",
                    value.param_type()
                )));
            }
        }

        let default = match (param_type, default, &prompt) {
            (ParamType::Boolean, _, Some(_)) => {
                return Err(ShellError::configuration(format!(
                    "{flag} is a boolean switch and cannot prompt"
                )));
            }
            (ParamType::Boolean, default, None) => Some(default.unwrap_or(Value::Bool(false))),
            (_, Some(_), Some(_)) => {
                return Err(ShellError::configuration(format!(
                    "{flag} should include either a default or a prompt, not both"
                )));
            }
            (_, None, None) => {
                return Err(ShellError::configuration(format!(
                    "Params should include either a default or a prompt. {flag} does not."
                )));
            }
            (_, default, _) => default,
        };

        Ok(Self {
            flag,
            bound_name,
            param_type,
            default,
            prompt,
            help: None,
        })
    }

    /// Creates a parameter whose type is taken from its default value.
    pub fn with_default(
        flag: impl Into<String>,
        bound_name: impl Into<String>,
        default: impl Into<Value>,
    ) -> Result<Self> {
        let default = default.into();
        Self::new(flag, bound_name, default.param_type(), Some(default), None)
    }

    /// Creates a parameter that is requested interactively when absent.
    pub fn with_prompt(
        flag: impl Into<String>,
        bound_name: impl Into<String>,
        param_type: ParamType,
        prompt: impl Into<String>,
    ) -> Result<Self> {
        Self::new(flag, bound_name, param_type, None, Some(prompt.into()))
    }

    /// Creates a boolean switch defaulting to `false`.
    pub fn switch(flag: impl Into<String>, bound_name: impl Into<String>) -> Result<Self> {
        Self::new(flag, bound_name, ParamType::Boolean, None, None)
    }

    /// Sets the help text shown by `<command> -help`.
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }

    pub(crate) fn help_switch() -> Self {
        Self {
            flag: HELP_FLAG.to_string(),
            bound_name: HELP_BOUND_NAME.to_string(),
            param_type: ParamType::Boolean,
            default: Some(Value::Bool(false)),
            prompt: None,
            help: Some(HELP_TEXT.to_string()),
        }
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }

    pub fn bound_name(&self) -> &str {
        &self.bound_name
    }

    pub fn param_type(&self) -> ParamType {
        self.param_type
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Returns true if a missing value must be requested interactively.
    pub fn requires_prompt(&self) -> bool {
        self.default.is_none()
    }

    /// Value bound when the flag appears without a following value.
    ///
    /// Boolean switches flip their default. Any other parameter used this way
    /// is bound to `true`, which mirrors how the line parser has always
    /// treated a trailing typed flag.
    pub(crate) fn presence_value(&self) -> Value {
        match (self.param_type, &self.default) {
            (ParamType::Boolean, Some(Value::Bool(default))) => Value::Bool(!default),
            _ => Value::Bool(true),
        }
    }
}

/// Result returned by a command handler.
pub type HandlerResult = anyhow::Result<Option<CommandOutput>>;

type HandlerFn = dyn Fn(&Arguments) -> HandlerResult;

enum Action {
    ListCommands,
    Call(Box<HandlerFn>),
}

/// The function behind a command, plus its optional description.
pub struct Handler {
    action: Action,
    description: Option<String>,
}

impl Handler {
    /// Wraps a function as a handler.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Arguments) -> HandlerResult + 'static,
    {
        Self {
            action: Action::Call(Box::new(func)),
            description: None,
        }
    }

    /// Sets the description shown in the command list and per-command help.
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub(crate) fn list_commands() -> Self {
        Self {
            action: Action::ListCommands,
            description: Some(HELP_TEXT.to_string()),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Runs the handler with fully resolved arguments.
    pub fn invoke(&self, args: &Arguments, registry: &CommandRegistry) -> HandlerResult {
        match &self.action {
            Action::ListCommands => Ok(Some(CommandOutput::info(help::render_command_list(
                registry,
            )))),
            Action::Call(func) => func(args),
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.action {
            Action::ListCommands => "builtin",
            Action::Call(_) => "function",
        };
        f.debug_struct("Handler")
            .field("kind", &kind)
            .field("description", &self.description)
            .finish()
    }
}

/// A registered command.
#[derive(Debug)]
pub struct CommandDef {
    name: String,
    handler: Handler,
    params: Vec<ParamDef>,
}

impl CommandDef {
    pub(crate) fn new(name: String, handler: Handler, mut params: Vec<ParamDef>) -> Self {
        params.push(ParamDef::help_switch());
        Self {
            name,
            handler,
            params,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Parameters in declaration order, ending with the implicit `-help`.
    pub fn params(&self) -> &[ParamDef] {
        &self.params
    }

    pub fn description(&self) -> Option<&str> {
        self.handler.description()
    }

    /// Finds the parameter declared with exactly this flag.
    pub fn find_param(&self, flag: &str) -> Option<&ParamDef> {
        self.params.iter().find(|p| p.flag == flag)
    }
}
