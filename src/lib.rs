//! trucli - an embeddable interactive command shell.
//!
//! Register commands with typed parameters on a [`CommandRegistry`], hand it
//! to a [`Shell`], and feed it lines. Missing parameters are prompted for,
//! values are coerced to their declared types, and every command gets a
//! generated `-help` page.

pub mod commands;
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;

pub use commands::{
    Arguments, CommandOutput, CommandRegistry, Handler, ParamDef, ParamType, Shell, Value,
};
pub use error::{Result, ShellError};
