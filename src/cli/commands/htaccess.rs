//! Htaccess command implementation.

use std::path::{Path, PathBuf};

use crate::cli::args::HtaccessArgs;
use crate::error::Result;
use crate::htaccess;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The htaccess command implementation.
pub struct HtaccessCommand {
    data_root: PathBuf,
    extensions: Vec<String>,
    args: HtaccessArgs,
}

impl HtaccessCommand {
    /// Create a new htaccess command.
    pub fn new(data_root: &Path, extensions: Vec<String>, args: HtaccessArgs) -> Self {
        Self {
            data_root: data_root.to_path_buf(),
            extensions,
            args,
        }
    }
}

impl Command for HtaccessCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.write {
            let path = htaccess::write(&self.data_root, self.extensions.as_slice())?;
            ui.success(&format!("Wrote {}", path.display()));
        } else {
            ui.data(htaccess::generate(self.extensions.as_slice()).trim_end());
        }
        Ok(CommandResult::success())
    }
}
