//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show every finding, stage summaries and the verdict.
    #[default]
    Normal,
    /// Show only the verdict.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows individual findings and stage summaries.
    pub fn shows_findings(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
