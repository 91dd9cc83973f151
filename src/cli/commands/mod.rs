//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`], which loads the dataset config and builds the
//! track registry once for every subcommand that needs it.

pub mod add;
pub mod completions;
pub mod create;
pub mod dispatcher;
pub mod htaccess;
pub mod list;
pub mod refseqs;
pub mod remove;
pub mod show;

pub use dispatcher::{parse_config_json, Command, CommandDispatcher, CommandResult};
