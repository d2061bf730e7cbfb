//! Command registry.
//!
//! Holds every registered command in insertion order. The built-in `help`
//! command is registered by [`CommandRegistry::new`].

use std::collections::{HashMap, HashSet};

use tracing::info;

use super::definitions::{CommandDef, Handler, ParamDef, HELP_BOUND_NAME, HELP_FLAG};
use crate::error::{Result, ShellError};

/// Name of the built-in command listing.
pub const HELP_COMMAND: &str = "help";

/// Registered commands, keyed by name.
#[derive(Debug)]
pub struct CommandRegistry {
    commands: Vec<CommandDef>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Creates a registry containing only the built-in `help` command.
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
            index: HashMap::new(),
        };
        registry.insert(CommandDef::new(
            HELP_COMMAND.to_string(),
            Handler::list_commands(),
            Vec::new(),
        ));
        registry
    }

    /// Registers a command.
    ///
    /// The implicit `-help` switch is appended to `params`. Fails if the name
    /// is taken or malformed, or if two parameters share a flag or a bound
    /// name. The `-help` flag and the `help` bound name are reserved.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: Handler,
        params: Vec<ParamDef>,
    ) -> Result<()> {
        let name = name.into();

        if name.is_empty() || name.contains(' ') {
            return Err(ShellError::configuration(format!(
                "invalid command name '{name}'"
            )));
        }
        if self.index.contains_key(&name) {
            return Err(ShellError::configuration(format!(
                "command '{name}' is already registered"
            )));
        }

        let mut flags = HashSet::new();
        let mut bound_names = HashSet::new();
        for param in &params {
            if param.flag() == HELP_FLAG {
                return Err(ShellError::configuration(format!(
                    "{name}: flag {HELP_FLAG} is reserved"
                )));
            }
            if param.bound_name() == HELP_BOUND_NAME {
                return Err(ShellError::configuration(format!(
                    "{name}: bound name '{HELP_BOUND_NAME}' is reserved ({})",
                    param.flag()
                )));
            }
            if !flags.insert(param.flag()) {
                return Err(ShellError::configuration(format!(
                    "{name}: flag {} is declared more than once",
                    param.flag()
                )));
            }
            if !bound_names.insert(param.bound_name()) {
                return Err(ShellError::configuration(format!(
                    "{name}: {} binds '{}', which is already bound",
                    param.flag(),
                    param.bound_name()
                )));
            }
        }

        info!("Registered command '{}' ({} parameters)", name, params.len());
        self.insert(CommandDef::new(name, handler, params));
        Ok(())
    }

    fn insert(&mut self, command: CommandDef) {
        self.index
            .insert(command.name().to_string(), self.commands.len());
        self.commands.push(command);
    }

    /// Finds a command by exact name.
    pub fn lookup(&self, name: &str) -> Option<&CommandDef> {
        self.index.get(name).map(|&i| &self.commands[i])
    }

    /// Finds the parameter of `name` declared with exactly `flag`.
    ///
    /// Returns `None` when either the command or the flag is unknown.
    pub fn resolve_flag(&self, name: &str, flag: &str) -> Option<&ParamDef> {
        self.lookup(name)?.find_param(flag)
    }

    /// Lists `(name, description)` pairs in registration order.
    pub fn list_commands(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.commands.iter().map(|c| (c.name(), c.description()))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
