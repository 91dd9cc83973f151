//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, DatasetConfig};
use crate::error::{Result, TrackDbError};
use crate::tracks::TrackRegistry;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing output through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Failure used when a requested track does not exist.
    pub fn not_found() -> Self {
        Self::failure(2)
    }
}

/// Parse a `--config` argument into a JSON object.
pub fn parse_config_json(raw: Option<&str>) -> Result<Map<String, Value>> {
    let Some(raw) = raw else {
        return Ok(Map::new());
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(TrackDbError::ConfigValidationError {
            message: "--config must be a JSON object".to_string(),
        }),
        Err(e) => Err(TrackDbError::ConfigValidationError {
            message: format!("--config is not valid JSON: {}", e),
        }),
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    data_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given data directory.
    pub fn new(data_root: PathBuf) -> Self {
        Self {
            data_root,
            config_override: None,
        }
    }

    /// Use an explicit config file instead of `<data-root>/trackdb.yml`.
    pub fn with_config(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path;
        self
    }

    /// Get the data directory.
    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    fn config(&self) -> Result<DatasetConfig> {
        load_config(&self.data_root, self.config_override.as_deref())
    }

    fn registry(&self) -> Result<TrackRegistry> {
        TrackRegistry::from_config(&self.data_root, &self.config()?)
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::List(args) => {
                super::list::ListCommand::new(self.registry()?, args.clone()).execute(ui)
            }
            Commands::Show(args) => {
                super::show::ShowCommand::new(self.registry()?, args.clone()).execute(ui)
            }
            Commands::Add(args) => {
                super::add::AddCommand::new(self.registry()?, args.clone()).execute(ui)
            }
            Commands::Remove(args) => {
                super::remove::RemoveCommand::new(self.registry()?, args.clone()).execute(ui)
            }
            Commands::Create(args) => {
                super::create::CreateCommand::new(self.registry()?, args.clone()).execute(ui)
            }
            Commands::Refseqs(args) => {
                super::refseqs::RefseqsCommand::new(self.registry()?, args.clone()).execute(ui)
            }
            Commands::Htaccess(args) => super::htaccess::HtaccessCommand::new(
                self.data_root(),
                self.config()?.htaccess_extensions,
                args.clone(),
            )
            .execute(ui),
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_not_found() {
        let result = CommandResult::not_found();
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn parse_config_json_accepts_objects() {
        let map = parse_config_json(Some(r#"{"compress": 1}"#)).unwrap();
        assert_eq!(map["compress"], Value::from(1));
        assert!(parse_config_json(None).unwrap().is_empty());
    }

    #[test]
    fn parse_config_json_rejects_non_objects() {
        assert!(parse_config_json(Some("[1, 2]")).is_err());
        assert!(parse_config_json(Some("{oops")).is_err());
    }

    #[test]
    fn dispatch_routes_to_list() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let cli = Cli::parse_from(["trackdb", "list"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
    }

    #[test]
    fn dispatch_reports_bad_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("trackdb.yml"), "type_aliases: [oops").unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let cli = Cli::parse_from(["trackdb", "list"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui);

        assert!(matches!(result, Err(TrackDbError::ConfigParseError { .. })));
    }
}
