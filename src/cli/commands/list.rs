//! List command implementation.
//!
//! The `trackdb list` command prints every track record in display order.

use serde_json::Value;

use crate::cli::args::ListArgs;
use crate::error::{Result, TrackDbError};
use crate::tracks::TrackRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    registry: TrackRegistry,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(registry: TrackRegistry, args: ListArgs) -> Self {
        Self { registry, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let tracks = self.registry.list_tracks()?;

        if self.args.json {
            let records: Vec<Value> = tracks.iter().map(|t| t.to_value()).collect();
            let json = serde_json::to_string_pretty(&records)
                .map_err(|e| TrackDbError::Other(e.into()))?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        if tracks.is_empty() {
            ui.message("No tracks registered.");
            return Ok(CommandResult::success());
        }

        let width = tracks.iter().map(|t| t.label.len()).max().unwrap_or(0);
        let theme = ui.theme().clone();
        for track in &tracks {
            ui.data(&format!(
                "{}  {}  {}",
                theme.label.apply_to(format!("{:<width$}", track.label)),
                theme.track_type.apply_to(&track.track_type),
                theme.dim.apply_to(&track.key),
            ));
        }

        Ok(CommandResult::success())
    }
}
