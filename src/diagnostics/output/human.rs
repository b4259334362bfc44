//! Human-readable output formatter.
//!
//! Turns a report into the lines shown on the console: each finding, the
//! failing stage's summary, then the verdict sentence.

use crate::diagnostics::{DiagnosticReport, Verdict};
use crate::ui::{OutputMode, UserInterface};

/// What a report line describes; decides how it is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Finding,
    StageSummary,
    Verdict(Verdict),
}

/// One line of human-readable output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub kind: LineKind,
    pub text: String,
}

/// Formats reports for human consumption.
pub struct HumanFormatter {
    mode: OutputMode,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Lines for `report`, in display order.
    ///
    /// Quiet mode keeps only the verdict.
    pub fn lines(&self, report: &DiagnosticReport) -> Vec<ReportLine> {
        let mut lines = Vec::new();

        if self.mode.shows_findings() {
            for stage in &report.stages {
                lines.extend(stage.findings.iter().map(|finding| ReportLine {
                    kind: LineKind::Finding,
                    text: finding.to_string(),
                }));

                if let Some(ref summary) = stage.summary {
                    lines.push(ReportLine {
                        kind: LineKind::StageSummary,
                        text: summary.clone(),
                    });
                }
            }
        }

        let verdict = report.verdict();
        lines.push(ReportLine {
            kind: LineKind::Verdict(verdict),
            text: verdict.message().to_string(),
        });

        lines
    }

    /// Write `report` to `ui`, one line per call.
    pub fn render(&self, report: &DiagnosticReport, ui: &mut dyn UserInterface) {
        for line in self.lines(report) {
            match line.kind {
                LineKind::Finding => ui.warning(&line.text),
                LineKind::StageSummary => ui.message(&line.text),
                LineKind::Verdict(Verdict::Passed) => ui.success(&line.text),
                LineKind::Verdict(Verdict::Failed) => ui.failure(&line.text),
            }
        }
    }
}
