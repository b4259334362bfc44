//! Console output.
//!
//! This module provides:
//! - [`UserInterface`] trait for the diagnostic output sink
//! - [`TerminalUI`] for styled terminal output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use car_diagnostics::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.warning("Missing Data Field Detected: YEAR");
//! ui.failure("Validation has failed! Your car needs more work!");
//!
//! assert_eq!(ui.lines().len(), 2);
//! assert!(ui.has_failure("Validation has failed!"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DiagnosticsTheme};

/// Sink for everything a command shows the user.
///
/// Diagnostic output goes to stdout; only `error` writes to stderr.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning, such as a finding.
    fn warning(&mut self, msg: &str);

    /// Display a failed outcome.
    fn failure(&mut self, msg: &str);

    /// Display an error that stops the command.
    fn error(&mut self, msg: &str);
}
