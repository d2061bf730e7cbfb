//! Command output types.
//!
//! Handlers return `Option<CommandOutput>`. Absence means "print nothing";
//! any present value is rendered through its `Display` implementation and
//! written to the shell's output collaborator.

use std::fmt;

use super::value::Value;

/// Output from a command handler.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Plain text, possibly spanning several lines.
    Info(String),

    /// A single typed value.
    Value(Value),

    /// Tabular data rendered with aligned columns.
    Table {
        /// Column headers.
        headers: Vec<String>,
        /// Row data (each row is a vector of cell values).
        rows: Vec<Vec<String>>,
    },

    /// Shell control action.
    Control(ControlAction),

    /// Several outputs rendered one after another.
    Multiple(Vec<CommandOutput>),
}

/// Control actions that affect the read loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Stop reading lines after the current one.
    Exit,
}

impl CommandOutput {
    /// Creates an info message.
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    /// Creates a table output.
    pub fn table(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self::Table { headers, rows }
    }

    /// Creates a multiple output from a vector.
    pub fn multiple(outputs: Vec<CommandOutput>) -> Self {
        Self::Multiple(outputs)
    }

    /// Creates an exit control action.
    pub fn exit() -> Self {
        Self::Control(ControlAction::Exit)
    }

    /// Returns true if this output, or any nested output, asks the loop to stop.
    pub fn requests_exit(&self) -> bool {
        match self {
            Self::Control(ControlAction::Exit) => true,
            Self::Multiple(outputs) => outputs.iter().any(Self::requests_exit),
            _ => false,
        }
    }

    /// Returns true if rendering produces visible text.
    pub fn is_displayable(&self) -> bool {
        match self {
            Self::Control(_) => false,
            Self::Multiple(outputs) => outputs.iter().any(Self::is_displayable),
            _ => true,
        }
    }
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info(msg) => f.write_str(msg),
            Self::Value(value) => write!(f, "{value}"),
            Self::Table { headers, rows } => f.write_str(&format_table(headers, rows)),
            Self::Control(_) => Ok(()),
            Self::Multiple(outputs) => {
                let parts: Vec<String> = outputs
                    .iter()
                    .filter(|o| o.is_displayable())
                    .map(ToString::to_string)
                    .collect();
                f.write_str(&parts.join("\n"))
            }
        }
    }
}

/// Formats a table as a string for display.
fn format_table(headers: &[String], rows: &[Vec<String>]) -> String {
    if headers.is_empty() {
        return String::new();
    }

    // Column widths in characters
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut output = String::new();

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
        .collect();
    output.push_str(&header_line.join(" | "));
    output.push('\n');

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&separator.join("-+-"));
    output.push('\n');

    for row in rows {
        let row_line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let width = widths.get(i).copied().unwrap_or(0);
                format!("{:width$}", cell, width = width)
            })
            .collect();
        output.push_str(&row_line.join(" | "));
        output.push('\n');
    }

    output.trim_end().to_string()
}
