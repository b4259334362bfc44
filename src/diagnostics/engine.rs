//! Ordered stage execution.
//!
//! The engine runs its stages in order against one record and stops at the
//! first stage that fails. Stages report everything they find before the
//! engine decides whether to continue.

use tracing::{debug, info};

use super::output::HumanFormatter;
use super::report::{DiagnosticReport, StageReport};
use super::stage::{Stage, StageId};
use super::stages::{DataFieldsStage, PartCompletenessStage, PartConditionStage};
use crate::error::Result;
use crate::record::{RequiredParts, VehicleRecord};
use crate::ui::UserInterface;

/// Runs diagnostic stages against vehicle records.
pub struct DiagnosticEngine {
    stages: Vec<Box<dyn Stage>>,
}

impl DiagnosticEngine {
    /// Create an engine with the built-in stages: data fields, part
    /// completeness against `requirements`, then part condition.
    pub fn new(requirements: RequiredParts) -> Self {
        Self::with_stages(vec![
            Box::new(DataFieldsStage),
            Box::new(PartCompletenessStage::new(requirements)),
            Box::new(PartConditionStage),
        ])
    }

    /// Create an engine that runs `stages` in the given order.
    pub fn with_stages(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// IDs of the configured stages, in run order.
    pub fn stage_ids(&self) -> Vec<StageId> {
        self.stages.iter().map(|s| s.id()).collect()
    }

    /// Run the stages against `record`.
    ///
    /// # Errors
    ///
    /// Propagates the first contract violation raised by a stage. No report
    /// is produced for a run that aborts.
    pub fn run(&self, record: &VehicleRecord) -> Result<DiagnosticReport> {
        let mut report = DiagnosticReport::new();

        for stage in &self.stages {
            debug!("Running stage {}", stage.id());
            let outcome = stage.check(record)?;
            let passed = outcome.passed;
            debug!(
                "Stage {} {} with {} finding(s)",
                stage.id(),
                if passed { "passed" } else { "failed" },
                outcome.findings.len()
            );

            report.push(StageReport::new(stage.as_ref(), outcome));
            if !passed {
                break;
            }
        }

        info!("Diagnostics {}", report.verdict());
        Ok(report)
    }

    /// Run the stages and write the human-readable report to `ui`.
    pub fn execute(
        &self,
        record: &VehicleRecord,
        ui: &mut dyn UserInterface,
    ) -> Result<DiagnosticReport> {
        let report = self.run(record)?;
        HumanFormatter::new(ui.output_mode()).render(&report, ui);
        Ok(report)
    }
}

impl Default for DiagnosticEngine {
    fn default() -> Self {
        Self::new(RequiredParts::standard())
    }
}
