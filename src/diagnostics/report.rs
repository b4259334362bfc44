//! Result of one diagnostic run.

use super::finding::Finding;
use super::stage::{Stage, StageId, StageOutcome};

/// Line reported when every stage passes.
pub const SUCCESS_MESSAGE: &str = "Validation has succeeded! You're good to go!";

/// Line reported when a stage fails.
pub const FAILURE_MESSAGE: &str = "Validation has failed! Your car needs more work!";

/// Overall outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
}

impl Verdict {
    /// The sentence reported for this verdict.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Passed => SUCCESS_MESSAGE,
            Verdict::Failed => FAILURE_MESSAGE,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Passed => write!(f, "passed"),
            Verdict::Failed => write!(f, "failed"),
        }
    }
}

/// What one stage reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub id: StageId,
    pub name: String,
    pub passed: bool,
    pub findings: Vec<Finding>,
    /// The stage's failure line, set only when it failed.
    pub summary: Option<String>,
}

impl StageReport {
    /// Record a stage's outcome.
    pub fn new(stage: &dyn Stage, outcome: StageOutcome) -> Self {
        let summary = (!outcome.passed).then(|| stage.failure_summary().to_string());
        Self {
            id: stage.id(),
            name: stage.name().to_string(),
            passed: outcome.passed,
            findings: outcome.findings,
            summary,
        }
    }
}

/// Stages that ran, in order. A failing stage is always the last entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub stages: Vec<StageReport>,
}

impl DiagnosticReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stage: StageReport) {
        self.stages.push(stage);
    }

    /// Failed if any stage that ran failed.
    pub fn verdict(&self) -> Verdict {
        if self.stages.iter().all(|s| s.passed) {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }

    pub fn passed(&self) -> bool {
        self.verdict() == Verdict::Passed
    }

    /// The stage that ended the run early, if any.
    pub fn failed_stage(&self) -> Option<&StageReport> {
        self.stages.iter().find(|s| !s.passed)
    }

    /// All findings across stages, in report order.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.stages.iter().flat_map(|s| s.findings.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::stages::{DataFieldsStage, PartConditionStage};
    use crate::record::DataField;

    #[test]
    fn empty_report_passes() {
        let report = DiagnosticReport::new();
        assert_eq!(report.verdict(), Verdict::Passed);
        assert!(report.failed_stage().is_none());
    }

    #[test]
    fn stage_report_carries_summary_only_on_failure() {
        let passed = StageReport::new(&PartConditionStage, StageOutcome::pass());
        assert!(passed.summary.is_none());

        let failed = StageReport::new(
            &DataFieldsStage,
            StageOutcome::from_findings(vec![Finding::missing_data_field(DataField::Year)]),
        );
        assert_eq!(failed.summary.as_deref(), Some("Data Field missing."));
        assert_eq!(failed.id, StageId::new("data-fields"));
    }

    #[test]
    fn failing_stage_fails_report() {
        let mut report = DiagnosticReport::new();
        report.push(StageReport::new(&PartConditionStage, StageOutcome::pass()));
        report.push(StageReport::new(
            &DataFieldsStage,
            StageOutcome::from_findings(vec![Finding::missing_data_field(DataField::Make)]),
        ));

        assert_eq!(report.verdict(), Verdict::Failed);
        assert!(!report.passed());
        assert_eq!(
            report.failed_stage().map(|s| s.id.clone()),
            Some(StageId::new("data-fields"))
        );
        assert_eq!(report.findings().count(), 1);
    }

    #[test]
    fn verdict_messages() {
        assert_eq!(
            Verdict::Passed.message(),
            "Validation has succeeded! You're good to go!"
        );
        assert_eq!(
            Verdict::Failed.message(),
            "Validation has failed! Your car needs more work!"
        );
        assert_eq!(Verdict::Failed.to_string(), "failed");
    }
}
