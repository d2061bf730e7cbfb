//! Command-line argument parsing for the trucli binary.

use clap::Parser;
use std::path::PathBuf;
use trucli::config::ShellConfig;
use trucli::logging::LogTarget;

/// An interactive command shell with typed, self-documenting commands.
#[derive(Parser, Debug)]
#[command(name = "trucli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prompt shown before each command (overrides the config file)
    #[arg(long, value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Execute this line instead of reading from the terminal (repeatable)
    #[arg(short = 'e', long = "execute", value_name = "LINE")]
    pub execute: Vec<String>,

    /// Write logs to stderr instead of the log file
    #[arg(long, conflicts_with = "log_file")]
    pub log_stderr: bool,

    /// Log file path (defaults to trucli.log in the state directory)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(ShellConfig::default_path)
    }

    /// Returns the prompt, preferring --prompt over the config file.
    pub fn resolve_prompt(&self, config: &ShellConfig) -> String {
        self.prompt.clone().unwrap_or_else(|| config.prompt.clone())
    }

    /// Returns where logs should be written.
    pub fn log_target(&self) -> LogTarget {
        if self.log_stderr {
            return LogTarget::Stderr;
        }
        self.log_file
            .clone()
            .map(LogTarget::File)
            .unwrap_or_default()
    }

    /// Returns true if lines were given with --execute.
    pub fn is_scripted(&self) -> bool {
        !self.execute.is_empty()
    }
}
