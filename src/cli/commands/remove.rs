//! Remove command implementation.

use crate::cli::args::RemoveArgs;
use crate::error::Result;
use crate::tracks::TrackRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The remove command implementation.
pub struct RemoveCommand {
    registry: TrackRegistry,
    args: RemoveArgs,
}

impl RemoveCommand {
    /// Create a new remove command.
    pub fn new(registry: TrackRegistry, args: RemoveArgs) -> Self {
        Self { registry, args }
    }
}

impl Command for RemoveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.registry.remove_track(&self.args.label)? {
            ui.success(&format!("Removed track '{}'", self.args.label));
            Ok(CommandResult::success())
        } else {
            ui.error(&format!("Track '{}' not found", self.args.label));
            Ok(CommandResult::not_found())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracks::TrackRecord;
    use crate::ui::MockUI;
    use serde_json::Map;
    use tempfile::TempDir;

    #[test]
    fn remove_existing_and_missing() {
        let temp = TempDir::new().unwrap();
        let registry = TrackRegistry::new(temp.path());
        registry
            .upsert_track(TrackRecord::new("genes", "Genes", "FeatureTrack", Map::new()))
            .unwrap();
        let args = RemoveArgs {
            label: "genes".to_string(),
        };
        let mut ui = MockUI::new();

        let first = RemoveCommand::new(registry.clone(), args.clone())
            .execute(&mut ui)
            .unwrap();
        let second = RemoveCommand::new(registry, args).execute(&mut ui).unwrap();

        assert!(first.success);
        assert_eq!(second.exit_code, 2);
        assert!(ui.has_error("genes"));
    }
}
