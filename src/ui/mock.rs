//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion.

use super::{OutputMode, TrackDbTheme, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug)]
pub struct MockUI {
    mode: OutputMode,
    theme: TrackDbTheme,
    data: Vec<String>,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUI {
    /// Create a new MockUI with Normal output mode and a plain theme.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            theme: TrackDbTheme::plain(),
            data: Vec::new(),
            messages: Vec::new(),
            successes: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Captured data lines.
    pub fn data_lines(&self) -> &[String] {
        &self.data
    }

    /// Captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All data lines joined with newlines.
    pub fn data_text(&self) -> String {
        self.data.join("\n")
    }

    /// Check whether any success message contains `needle`.
    pub fn has_success(&self, needle: &str) -> bool {
        self.successes.iter().any(|s| s.contains(needle))
    }

    /// Check whether any error message contains `needle`.
    pub fn has_error(&self, needle: &str) -> bool {
        self.errors.iter().any(|s| s.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn data(&mut self, line: &str) {
        self.data.push(line.to_string());
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn theme(&self) -> &TrackDbTheme {
        &self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_channel() {
        let mut ui = MockUI::new();
        ui.data("row");
        ui.message("info");
        ui.success("ok");
        ui.warning("careful");
        ui.error("broken");

        assert_eq!(ui.data_lines(), &["row".to_string()]);
        assert_eq!(ui.messages(), &["info".to_string()]);
        assert!(ui.has_success("ok"));
        assert_eq!(ui.warnings().len(), 1);
        assert!(ui.has_error("broke"));
    }

    #[test]
    fn output_mode_is_settable() {
        let mut ui = MockUI::new();
        ui.set_output_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
