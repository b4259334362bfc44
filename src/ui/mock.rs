//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion, both by kind and in the order it was written.
//!
//! # Example
//!
//! ```
//! use car_diagnostics::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Parts missing.");
//! ui.success("Done!");
//!
//! assert!(ui.messages().contains(&"Parts missing.".to_string()));
//! assert_eq!(ui.lines(), &["Parts missing.".to_string(), "Done!".to_string()]);
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    lines: Vec<String>,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    failures: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Every line written to stdout, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured failure messages.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific failure was shown.
    pub fn has_failure(&self, msg: &str) -> bool {
        self.failures.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured output.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.failures.clear();
        self.errors.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
        self.warnings.push(msg.to_string());
    }

    fn failure(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
        self.failures.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
