//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be tested against [`MockUI`]
//! - [`TerminalUI`] for real terminal usage
//! - [`TrackDbTheme`] styling
//!
//! # Example
//!
//! ```
//! use trackdb::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("genes");
//! ui.success("Stored track 'genes'");
//!
//! assert_eq!(ui.messages(), &["genes".to_string()]);
//! assert!(ui.has_success("Stored"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, TrackDbTheme};

/// Trait for user-facing output.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Print a line of primary output (always shown; this is the data).
    fn data(&mut self, line: &str);

    /// Display an informational message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Theme used to style output.
    fn theme(&self) -> &TrackDbTheme;
}
