//! Command-line interface for trackdb.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    AddArgs, Cli, Commands, CompletionsArgs, CreateArgs, HtaccessArgs, ListArgs, RefseqsArgs,
    RemoveArgs, ShowArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
