//! The vehicle record and its missing-parts tally.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::part::{Part, PartType};
use super::requirements::RequiredParts;

/// Part types still needed to satisfy a [`RequiredParts`] table, with the
/// number of units each is short. Ordered like the table.
pub type MissingParts = IndexMap<PartType, u32>;

/// Descriptive data fields every record should carry.
///
/// Declaration order is the order fields are checked and reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataField {
    Make,
    Model,
    Year,
}

/// A vehicle and its part inventory, as read from a record document.
///
/// Nothing is validated on construction; every field may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename = "car")]
pub struct VehicleRecord {
    #[serde(default)]
    pub year: Option<String>,

    #[serde(default)]
    pub make: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub parts: Vec<Part>,
}

impl VehicleRecord {
    /// Value of a data field, `None` when absent.
    ///
    /// An empty string is present.
    pub fn field(&self, field: DataField) -> Option<&str> {
        match field {
            DataField::Make => self.make.as_deref(),
            DataField::Model => self.model.as_deref(),
            DataField::Year => self.year.as_deref(),
        }
    }

    /// Compute which required parts this record lacks.
    ///
    /// Each part whose type has a rule in `requirements` uses up one unit of
    /// that rule. Surplus parts are ignored and never offset other types.
    /// Types that end at zero are dropped, so an empty result means the
    /// record is complete.
    pub fn missing_parts(&self, requirements: &RequiredParts) -> MissingParts {
        let mut remaining = requirements.to_counts();

        for part_type in self.parts.iter().filter_map(|p| p.part_type) {
            if let Some(count) = remaining.get_mut(&part_type) {
                *count = count.saturating_sub(1);
            }
        }

        remaining.retain(|_, count| *count > 0);
        remaining
    }
}
