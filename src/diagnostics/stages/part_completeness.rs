//! Part completeness validation.
//!
//! This stage compares the record's parts against a required-parts table.

use crate::diagnostics::{Finding, Stage, StageId, StageOutcome};
use crate::error::Result;
use crate::record::{RequiredParts, VehicleRecord};

/// Validates that no required part is missing.
pub struct PartCompletenessStage {
    requirements: RequiredParts,
}

impl PartCompletenessStage {
    /// Create a stage that checks against `requirements`.
    pub fn new(requirements: RequiredParts) -> Self {
        Self { requirements }
    }

    /// The table this stage checks against.
    pub fn requirements(&self) -> &RequiredParts {
        &self.requirements
    }
}

impl Default for PartCompletenessStage {
    fn default() -> Self {
        Self::new(RequiredParts::standard())
    }
}

impl Stage for PartCompletenessStage {
    fn id(&self) -> StageId {
        StageId::new("part-completeness")
    }

    fn name(&self) -> &str {
        "Part Completeness"
    }

    fn failure_summary(&self) -> &str {
        "Parts missing."
    }

    fn check(&self, record: &VehicleRecord) -> Result<StageOutcome> {
        let findings = record
            .missing_parts(&self.requirements)
            .into_iter()
            .map(|(part_type, count)| Finding::missing_parts(part_type, count))
            .collect::<Result<Vec<_>>>()?;

        Ok(StageOutcome::from_findings(findings))
    }
}
