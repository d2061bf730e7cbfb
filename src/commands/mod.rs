//! Command registration, parsing, and dispatch.
//!
//! Parsing is kept separate from execution so command lines can be tested
//! against a registry without any terminal.

pub mod arguments;
pub mod definitions;
pub mod dispatcher;
pub mod help;
pub mod io;
pub mod output;
pub mod registry;
pub mod resolver;
pub mod router;
pub mod tokenizer;
pub mod value;

pub use arguments::Arguments;
pub use definitions::{CommandDef, Handler, HandlerResult, ParamDef};
pub use dispatcher::{Shell, DEFAULT_PROMPT};
pub use io::{CapturedOutput, LineInput, LineOutput, ReaderInput, ScriptedInput, WriterOutput};
pub use output::{CommandOutput, ControlAction};
pub use registry::CommandRegistry;
pub use router::{CommandRouter, ParsedInvocation};
pub use value::{ParamType, Value};
