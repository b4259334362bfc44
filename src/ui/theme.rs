//! Visual theme and styling.

use console::Style;

/// Colors for diagnostic output.
#[derive(Debug, Clone)]
pub struct DiagnosticsTheme {
    /// Style for the passing verdict (green).
    pub success: Style,
    /// Style for findings (orange).
    pub warning: Style,
    /// Style for the failing verdict (red bold).
    pub failure: Style,
    /// Style for errors (red bold).
    pub error: Style,
}

impl Default for DiagnosticsTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            failure: Style::new().red().bold(),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            failure: Style::new(),
            error: Style::new(),
        }
    }

    /// Format a success message in green.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(msg))
    }

    /// Format a warning message in orange.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(msg))
    }

    /// Format a failed outcome in red bold.
    pub fn format_failure(&self, msg: &str) -> String {
        format!("{}", self.failure.apply_to(msg))
    }

    /// Format an error message in red bold.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors(no_color: bool) -> bool {
    if no_color {
        return false;
    }

    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
