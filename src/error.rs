//! Error types for trucli.
//!
//! Defines the single error enum shared by registration, line parsing,
//! interactive resolution, and the host binary.

use crate::commands::value::ParamType;
use thiserror::Error;

/// Main error type for shell operations.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Invalid command or parameter registration (duplicate name, flag
    /// collision, parameter with neither default nor prompt, bad config file).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A flag token that the command does not declare.
    #[error("Unknown flag: {0}")]
    UnknownFlag(String),

    /// A flag value on the command line that does not coerce to the declared type.
    #[error("{value} is not a valid {expected}")]
    InvalidFlagValue { value: String, expected: ParamType },

    /// An interactive prompt response that does not coerce to the declared type.
    #[error("{value} is not a {expected}")]
    InvalidPromptResponse { value: String, expected: ParamType },

    /// Unknown command name or a malformed token sequence.
    #[error("{0}: Could not parse command.")]
    Unparseable(String),

    /// The input collaborator reached end of input while a prompt was pending.
    #[error("Input closed")]
    InputClosed,

    /// Error returned by a user handler.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),

    /// Reading from or writing to the host terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    /// Creates a configuration error with the given message.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Creates an unparseable-line error for the given raw line.
    pub fn unparseable(line: impl Into<String>) -> Self {
        Self::Unparseable(line.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "Configuration Error",
            Self::UnknownFlag(_) => "Unknown Flag",
            Self::InvalidFlagValue { .. } | Self::InvalidPromptResponse { .. } => "Type Error",
            Self::Unparseable(_) => "Parse Error",
            Self::InputClosed => "Input Closed",
            Self::Handler(_) => "Handler Error",
            Self::Io(_) => "I/O Error",
        }
    }

    /// Returns true for errors that only abort the current input line.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnknownFlag(_)
                | Self::InvalidFlagValue { .. }
                | Self::InvalidPromptResponse { .. }
                | Self::Unparseable(_)
        )
    }
}

/// Result type alias using ShellError.
pub type Result<T> = std::result::Result<T, ShellError>;
