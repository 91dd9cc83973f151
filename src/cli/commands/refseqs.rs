//! Refseqs command implementation.

use crate::cli::args::RefseqsArgs;
use crate::error::{Result, TrackDbError};
use crate::tracks::TrackRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The refseqs command implementation.
pub struct RefseqsCommand {
    registry: TrackRegistry,
    args: RefseqsArgs,
}

impl RefseqsCommand {
    /// Create a new refseqs command.
    pub fn new(registry: TrackRegistry, args: RefseqsArgs) -> Self {
        Self { registry, args }
    }
}

impl Command for RefseqsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let refseqs = self.registry.list_reference_sequences()?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&refseqs)
                .map_err(|e| TrackDbError::Other(e.into()))?;
            ui.data(&json);
        } else if refseqs.is_empty() {
            ui.message("No reference sequences.");
        } else {
            for refseq in &refseqs {
                ui.data(&format!(
                    "{}\t{}..{}\t{} bp",
                    refseq.name, refseq.start, refseq.end, refseq.length
                ));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn refseqs_missing_file() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        RefseqsCommand::new(TrackRegistry::new(temp.path()), RefseqsArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.data_lines().is_empty());
        assert_eq!(ui.messages().len(), 1);
    }

    #[test]
    fn refseqs_prints_each_sequence() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("seq")).unwrap();
        fs::write(
            temp.path().join("seq/refSeqs.json"),
            r#"[
                {"name": "chr1", "seqDir": "seq/chr1", "start": 0, "end": 500,
                 "length": 500, "seqChunkSize": 20000},
                {"name": "chr2", "seqDir": "seq/chr2", "start": 0, "end": 300,
                 "length": 300, "seqChunkSize": 20000}
            ]"#,
        )
        .unwrap();
        let mut ui = MockUI::new();

        RefseqsCommand::new(TrackRegistry::new(temp.path()), RefseqsArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.data_lines().len(), 2);
        assert_eq!(ui.data_lines()[1], "chr2\t0..300\t300 bp");
    }
}
