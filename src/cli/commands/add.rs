//! Add command implementation.
//!
//! The `trackdb add` command upserts a track record.

use crate::cli::args::AddArgs;
use crate::error::Result;
use crate::tracks::{TrackRecord, TrackRegistry};
use crate::ui::UserInterface;

use super::dispatcher::{parse_config_json, Command, CommandResult};

/// The add command implementation.
pub struct AddCommand {
    registry: TrackRegistry,
    args: AddArgs,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(registry: TrackRegistry, args: AddArgs) -> Self {
        Self { registry, args }
    }
}

impl Command for AddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = parse_config_json(self.args.config.as_deref())?;
        let key = self.args.key.as_deref().unwrap_or(&self.args.label);

        // Unknown types are still stored; lookup reports them.
        if let Err(e) = self.registry.handlers().resolve(&self.args.track_type) {
            ui.warning(&e.to_string());
        }

        let record = TrackRecord::new(&self.args.label, key, &self.args.track_type, config);
        self.registry.upsert_track(record)?;

        ui.success(&format!("Stored track '{}'", self.args.label));
        Ok(CommandResult::success())
    }
}
