//! Individual diagnostic findings.
//!
//! A [`Finding`] is one reportable problem: an absent data field, a part type
//! short of its required count, or a part in damaged condition. Its `Display`
//! form is the line shown to the user.

use serde::Serialize;

use crate::error::{DiagnosticsError, Result};
use crate::record::{ConditionType, DataField, Part, PartType};

/// A problem found in a vehicle record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// A descriptive field is absent.
    MissingDataField { field: DataField },

    /// Fewer parts of a type than the required-parts table asks for.
    MissingParts { part_type: PartType, count: u32 },

    /// A part outside working condition.
    DamagedPart {
        part_type: PartType,
        condition: ConditionType,
        #[serde(skip_serializing_if = "Option::is_none")]
        inventory_id: Option<String>,
    },
}

impl Finding {
    /// Finding for an absent data field.
    pub fn missing_data_field(field: DataField) -> Self {
        Self::MissingDataField { field }
    }

    /// Finding for a part type short of `count` units.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `count` is zero. A deficit entry with no
    /// shortfall means the tally that produced it is malformed.
    pub fn missing_parts(part_type: PartType, count: u32) -> Result<Self> {
        if count == 0 {
            return Err(DiagnosticsError::invalid_argument(format!(
                "Count must be greater than 0 (part type {})",
                part_type
            )));
        }
        Ok(Self::MissingParts { part_type, count })
    }

    /// Finding for a part that is not in working condition.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the part has no type or no condition.
    pub fn damaged_part(part: &Part) -> Result<Self> {
        let part_type = part
            .part_type
            .ok_or_else(|| DiagnosticsError::invalid_argument("PartType must not be null"))?;
        let condition = part
            .condition
            .ok_or_else(|| DiagnosticsError::invalid_argument("ConditionType must not be null"))?;

        Ok(Self::DamagedPart {
            part_type,
            condition,
            inventory_id: part.inventory_id.clone(),
        })
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDataField { field } => {
                write!(f, "Missing Data Field Detected: {}", field)
            }
            Self::MissingParts { part_type, count } => {
                write!(f, "Missing Part(s) Detected: {} - Count: {}", part_type, count)
            }
            Self::DamagedPart {
                part_type,
                condition,
                ..
            } => write!(
                f,
                "Damaged Part Detected: {} - Condition: {}",
                part_type, condition
            ),
        }
    }
}
