//! Part condition validation.
//!
//! This stage flags every part that is not NEW, GOOD or WORN.

use crate::diagnostics::{Finding, Stage, StageId, StageOutcome};
use crate::error::Result;
use crate::record::VehicleRecord;

/// Validates that every installed part is in working condition.
pub struct PartConditionStage;

impl Stage for PartConditionStage {
    fn id(&self) -> StageId {
        StageId::new("part-condition")
    }

    fn name(&self) -> &str {
        "Part Condition"
    }

    fn failure_summary(&self) -> &str {
        "Parts are in bad condition."
    }

    fn check(&self, record: &VehicleRecord) -> Result<StageOutcome> {
        let mut findings = Vec::new();

        for part in &record.parts {
            if !part.is_in_working_condition()? {
                findings.push(Finding::damaged_part(part)?);
            }
        }

        Ok(StageOutcome::from_findings(findings))
    }
}
