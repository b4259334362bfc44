//! Data field validation.
//!
//! This stage ensures the record carries a make, a model and a year.

use strum::IntoEnumIterator;

use crate::diagnostics::{Finding, Stage, StageId, StageOutcome};
use crate::error::Result;
use crate::record::{DataField, VehicleRecord};

/// Validates that the descriptive data fields are present.
///
/// Only absence fails; an empty value counts as present.
pub struct DataFieldsStage;

impl Stage for DataFieldsStage {
    fn id(&self) -> StageId {
        StageId::new("data-fields")
    }

    fn name(&self) -> &str {
        "Data Fields"
    }

    fn failure_summary(&self) -> &str {
        "Data Field missing."
    }

    fn check(&self, record: &VehicleRecord) -> Result<StageOutcome> {
        let findings = DataField::iter()
            .filter(|field| record.field(*field).is_none())
            .map(Finding::missing_data_field)
            .collect();

        Ok(StageOutcome::from_findings(findings))
    }
}
