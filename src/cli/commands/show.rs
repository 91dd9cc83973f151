//! Show command implementation.
//!
//! The `trackdb show <label>` command resolves a track to its handler.

use serde_json::{json, Value};

use crate::cli::args::ShowArgs;
use crate::error::{Result, TrackDbError};
use crate::handlers::TrackHandler;
use crate::tracks::TrackRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    registry: TrackRegistry,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(registry: TrackRegistry, args: ShowArgs) -> Self {
        Self { registry, args }
    }
}

fn describe(handler: &dyn TrackHandler) -> Value {
    json!({
        "label": handler.label(),
        "key": handler.key(),
        "handler": handler.type_name(),
        "kind": handler.kind().to_string(),
        "class": handler.client_class(),
        "storageDir": handler.storage_dir().to_string_lossy(),
        "baseUrl": handler.base_url(),
        "config": handler.config(),
    })
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(handler) = self.registry.lookup_track(&self.args.label)? else {
            ui.error(&format!("Track '{}' not found", self.args.label));
            return Ok(CommandResult::not_found());
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&describe(handler.as_ref()))
                .map_err(|e| TrackDbError::Other(e.into()))?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        let theme = ui.theme().clone();
        let rows = [
            ("label", handler.label().to_string()),
            ("key", handler.key().to_string()),
            ("handler", handler.type_name().to_string()),
            ("class", handler.client_class().to_string()),
            ("storage", handler.storage_dir().display().to_string()),
            ("url", handler.base_url().to_string()),
        ];
        for (name, value) in rows {
            ui.data(&format!("{} {}", theme.key.apply_to(format!("{:<8}", name)), value));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracks::TrackRecord;
    use crate::ui::MockUI;
    use serde_json::Map;
    use tempfile::TempDir;

    fn args(label: &str, json: bool) -> ShowArgs {
        ShowArgs {
            label: label.to_string(),
            json,
        }
    }

    #[test]
    fn show_missing_track_is_not_found() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = ShowCommand::new(TrackRegistry::new(temp.path()), args("nope", false))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("nope"));
    }

    #[test]
    fn show_resolves_fallback_type() {
        let temp = TempDir::new().unwrap();
        let registry = TrackRegistry::new(temp.path());
        registry
            .upsert_track(TrackRecord::new("wig", "Wiggle", "ImageTrack.Wiggle", Map::new()))
            .unwrap();
        let mut ui = MockUI::new();

        ShowCommand::new(registry, args("wig", true))
            .execute(&mut ui)
            .unwrap();

        let parsed: Value = serde_json::from_str(&ui.data_text()).unwrap();
        assert_eq!(parsed["handler"], "ImageTrack");
        assert_eq!(parsed["kind"], "image");
        assert_eq!(parsed["baseUrl"], "tracks/wig/{refseq}");
        assert_eq!(parsed["config"]["type"], "ImageTrack.Wiggle");
    }

    #[test]
    fn show_plain_output() {
        let temp = TempDir::new().unwrap();
        let registry = TrackRegistry::new(temp.path());
        registry
            .upsert_track(TrackRecord::new("genes", "Genes", "FeatureTrack", Map::new()))
            .unwrap();
        let mut ui = MockUI::new();

        let result = ShowCommand::new(registry, args("genes", false))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.data_text().contains("FeatureTrack"));
        assert!(ui.data_text().contains("tracks/genes/{refseq}"));
    }
}
