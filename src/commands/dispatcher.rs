//! Line dispatch and the read loop.
//!
//! [`Shell`] owns a [`CommandRegistry`] and the two line collaborators. Each
//! input line is parsed, completed interactively, and handed to its handler
//! before the next line is read.

use tracing::{debug, error, warn};

use super::definitions::HELP_BOUND_NAME;
use super::help::render_command_help;
use super::io::{LineInput, LineOutput};
use super::registry::CommandRegistry;
use super::resolver::resolve_missing;
use super::router::{CommandRouter, ParsedInvocation};
use crate::error::{Result, ShellError};

/// Prompt shown before each command line unless configured otherwise.
pub const DEFAULT_PROMPT: &str = ">";

/// An interactive shell session.
pub struct Shell<I, O> {
    registry: CommandRegistry,
    input: I,
    output: O,
    prompt: String,
    exit_requested: bool,
}

impl<I: LineInput, O: LineOutput> Shell<I, O> {
    pub fn new(registry: CommandRegistry, input: I, output: O) -> Self {
        Self {
            registry,
            input,
            output,
            prompt: DEFAULT_PROMPT.to_string(),
            exit_requested: false,
        }
    }

    /// Sets the prompt shown before each command line.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Mutable registry access for registering commands before the loop starts.
    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Returns true once a handler has returned the exit control output.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Parses, resolves, and executes one input line.
    ///
    /// Parse and coercion failures are written to the output and reported as
    /// `Ok(())`. Handler failures, I/O failures, and end of input during a
    /// prompt are returned to the caller.
    pub fn execute_line(&mut self, line: &str) -> Result<()> {
        let parsed = match CommandRouter::parse(&self.registry, line) {
            Ok(parsed) => parsed,
            Err(e) => return Self::report(&mut self.output, e),
        };
        let ParsedInvocation { command, mut args } = parsed;

        if args.flag(HELP_BOUND_NAME) {
            self.output.write_line(&render_command_help(command))?;
            return Ok(());
        }

        if let Err(e) = resolve_missing(command, &mut args, &mut self.input) {
            return Self::report(&mut self.output, e);
        }
        args.remove(HELP_BOUND_NAME);

        debug!("Invoking '{}' with {:?}", command.name(), args);
        let result = command.handler().invoke(&args, &self.registry)?;

        if let Some(output) = result {
            if output.is_displayable() {
                self.output.write_line(&output.to_string())?;
            }
            if output.requests_exit() {
                debug!("'{}' requested exit", command.name());
                self.exit_requested = true;
            }
        }
        Ok(())
    }

    /// Writes a recoverable error as one line; passes anything else through.
    fn report(output: &mut O, err: ShellError) -> Result<()> {
        if !err.is_recoverable() {
            return Err(err);
        }
        warn!("{}: {}", err.category(), err);
        output.write_line(&err.to_string())?;
        Ok(())
    }

    /// Reads and executes lines until end of input or an exit request.
    ///
    /// Blank lines are skipped. A failing handler is reported and the loop
    /// continues; I/O errors end the loop with an error.
    pub fn run(&mut self) -> Result<()> {
        while !self.exit_requested {
            let line = match self.input.read_line(&self.prompt)? {
                Some(line) => line,
                None => break,
            };
            if !self.step(&line)? {
                break;
            }
        }
        Ok(())
    }

    /// Executes the given lines in order, as if typed at the prompt.
    pub fn run_lines<L, S>(&mut self, lines: L) -> Result<()>
    where
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            if self.exit_requested || !self.step(line.as_ref())? {
                break;
            }
        }
        Ok(())
    }

    /// Runs one line inside the loop. Returns false when the loop should stop.
    fn step(&mut self, line: &str) -> Result<bool> {
        if line.trim().is_empty() {
            return Ok(true);
        }
        match self.execute_line(line) {
            Ok(()) => Ok(true),
            Err(ShellError::InputClosed) => Ok(false),
            Err(ShellError::Handler(e)) => {
                error!("Command '{}' failed: {:#}", line, e);
                self.output.write_line(&format!("Error: {e:#}"))?;
                Ok(true)
            }
            Err(e) => Err(e),
        }
    }
}
