//! Parts and their closed tag sets.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{DiagnosticsError, Result};

/// Kind of component installed in a vehicle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum PartType {
    Engine,
    Electrical,
    FuelFilter,
    OilFilter,
    Tire,
    SparkPlug,
    BrakePad,
}

impl TryFrom<String> for PartType {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value
            .trim()
            .parse()
            .map_err(|_| format!("unknown part type: {}", value.trim()))
    }
}

/// Physical condition of a part.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum ConditionType {
    New,
    Good,
    Worn,
    WornOut,
    Damaged,
    Cracked,
    Flat,
    Dead,
    NoPower,
    Spent,
}

impl ConditionType {
    /// Whether a part in this condition can stay in service.
    pub fn is_working(&self) -> bool {
        matches!(self, Self::New | Self::Good | Self::Worn)
    }
}

impl TryFrom<String> for ConditionType {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value
            .trim()
            .parse()
            .map_err(|_| format!("unknown condition: {}", value.trim()))
    }
}

/// One component of a vehicle.
///
/// `part_type` and `condition` are optional so that an incomplete document
/// still loads. Evaluating a part without them is a contract violation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default)]
    pub inventory_id: Option<String>,

    #[serde(rename = "type", default)]
    pub part_type: Option<PartType>,

    #[serde(default)]
    pub condition: Option<ConditionType>,
}

impl Part {
    /// Create a fully specified part.
    pub fn new(
        inventory_id: impl Into<String>,
        part_type: PartType,
        condition: ConditionType,
    ) -> Self {
        Self {
            inventory_id: Some(inventory_id.into()),
            part_type: Some(part_type),
            condition: Some(condition),
        }
    }

    /// Whether this part is NEW, GOOD or WORN.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the part has no condition.
    pub fn is_in_working_condition(&self) -> Result<bool> {
        match self.condition {
            Some(condition) => Ok(condition.is_working()),
            None => Err(DiagnosticsError::invalid_argument(format!(
                "part {} has no condition",
                self.inventory_id.as_deref().unwrap_or("<unknown>")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn part_type_tags_are_screaming_snake_case() {
        assert_eq!(PartType::FuelFilter.to_string(), "FUEL_FILTER");
        assert_eq!(PartType::Tire.to_string(), "TIRE");
        assert_eq!("OIL_FILTER".parse::<PartType>(), Ok(PartType::OilFilter));
    }

    #[test]
    fn condition_tags_round_trip_through_display() {
        for condition in ConditionType::iter() {
            let tag = condition.to_string();
            assert_eq!(tag.parse::<ConditionType>(), Ok(condition));
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert!(PartType::try_from("WINDSHIELD".to_string()).is_err());
        let err = ConditionType::try_from("SHINY".to_string()).unwrap_err();
        assert!(err.contains("SHINY"));
    }

    #[test]
    fn only_new_good_and_worn_are_working() {
        let working: Vec<_> = ConditionType::iter().filter(|c| c.is_working()).collect();
        assert_eq!(
            working,
            vec![ConditionType::New, ConditionType::Good, ConditionType::Worn]
        );
    }

    #[test]
    fn working_condition_follows_condition_tag() {
        for condition in ConditionType::iter() {
            let part = Part::new("p-1", PartType::Tire, condition);
            assert_eq!(part.is_in_working_condition().unwrap(), condition.is_working());
        }
    }

    #[test]
    fn missing_condition_is_invalid_argument() {
        let part = Part {
            inventory_id: Some("abc".into()),
            part_type: Some(PartType::Engine),
            condition: None,
        };

        let err = part.is_in_working_condition().unwrap_err();

        assert!(matches!(err, DiagnosticsError::InvalidArgument { .. }));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn part_deserializes_from_camel_case_json() {
        let part: Part = serde_json::from_str(
            r#"{"inventoryId": "x1", "type": "ELECTRICAL", "condition": "DEAD"}"#,
        )
        .unwrap();

        assert_eq!(part, Part::new("x1", PartType::Electrical, ConditionType::Dead));
    }
}
