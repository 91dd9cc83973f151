//! Create command implementation.
//!
//! The `trackdb create` command builds a feature or image track handler,
//! prepares its storage root and registers the track.

use std::fs;

use crate::cli::args::CreateArgs;
use crate::error::Result;
use crate::tracks::{TrackRecord, TrackRegistry};
use crate::ui::UserInterface;

use super::dispatcher::{parse_config_json, Command, CommandResult};

/// The create command implementation.
pub struct CreateCommand {
    registry: TrackRegistry,
    args: CreateArgs,
}

impl CreateCommand {
    /// Create a new create command.
    pub fn new(registry: TrackRegistry, args: CreateArgs) -> Self {
        Self { registry, args }
    }
}

impl Command for CreateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = parse_config_json(self.args.config.as_deref())?;
        let key = self.args.key.as_deref().unwrap_or("");

        let handler = self.registry.create_track(
            self.args.kind,
            &self.args.label,
            config.clone(),
            key,
            self.args.subtype.as_deref(),
        )?;

        // Parent of the per-refseq directory: tracks/<label>
        if let Some(track_root) = handler.storage_dir().parent() {
            fs::create_dir_all(track_root)?;
        }

        let record = TrackRecord::new(
            handler.label(),
            handler.key(),
            handler.client_class(),
            config,
        );
        self.registry.upsert_track(record)?;

        ui.success(&format!(
            "Created {} track '{}' at {}",
            self.args.kind,
            handler.label(),
            handler.base_url()
        ));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackDbError;
    use crate::handlers::TrackKind;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn args(kind: TrackKind, label: &str, subtype: Option<&str>) -> CreateArgs {
        CreateArgs {
            kind,
            label: label.to_string(),
            key: None,
            subtype: subtype.map(String::from),
            config: None,
        }
    }

    #[test]
    fn create_registers_and_prepares_directory() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = CreateCommand::new(
            TrackRegistry::new(temp.path()),
            args(TrackKind::Image, "cov", Some("ImageTrack.Wiggle")),
        )
        .execute(&mut ui)
        .unwrap();

        assert!(result.success);
        assert!(temp.path().join("tracks").join("cov").is_dir());
        let tracks = TrackRegistry::new(temp.path()).list_tracks().unwrap();
        assert_eq!(tracks[0].label, "cov");
        assert_eq!(tracks[0].key, "cov");
        assert_eq!(tracks[0].track_type, "ImageTrack.Wiggle");
    }

    #[test]
    fn create_rejects_cross_family_subtype() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = CreateCommand::new(
            TrackRegistry::new(temp.path()),
            args(TrackKind::Feature, "genes", Some("ImageTrack")),
        )
        .execute(&mut ui);

        assert!(matches!(
            result,
            Err(TrackDbError::HandlerConstruction { .. })
        ));
        assert!(!temp.path().join("trackList.json").exists());
    }
}
